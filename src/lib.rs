/// warp-digest library
///
/// Scans a day of Warp terminal logs, classifies the commands and summarises
/// the development session.

pub mod config;
pub mod core;
pub mod error;
pub mod intelligence;
pub mod logging;
pub mod report;

// Re-exports for convenience
pub use config::AnalyzerConfig;
pub use crate::core::Pipeline;
pub use error::{DigestError, Result};
