/// Error types for warp-digest
///
/// Only failures that stop a run live here. Lines without a usable timestamp
/// and undecodable bytes are absorbed by the pipeline and never become errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for warp-digest operations
#[derive(Error, Debug)]
pub enum DigestError {
    /// Log file missing, unopenable, or failed mid-read
    #[error("Log source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Target date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias for warp-digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Convert DigestError to a user-friendly error message
impl DigestError {
    pub fn user_message(&self) -> String {
        match self {
            DigestError::SourceUnavailable { path, source } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    format!("Log file not found: {}", path.display())
                } else {
                    format!("Error reading log file {}: {}", path.display(), source)
                }
            }
            DigestError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            DigestError::InvalidDate(input) => {
                format!("'{}' is not a valid date. Use YYYY-MM-DD", input)
            }
        }
    }
}
