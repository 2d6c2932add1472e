/// Report module
///
/// Console presentation of an analysis.

pub mod renderer;

pub use renderer::{progress_line, ReportContext, ReportRenderer};
