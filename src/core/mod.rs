/// Core scanning pipeline
///
/// Reads the log, pulls timestamps, classifies commands and collects the
/// day's events, in that order.

pub mod classifier;
pub mod collector;
pub mod pipeline;
pub mod scanner;
pub mod timestamp;

pub use classifier::{Classification, CommandCategory, CommandClassifier, CommandSignature};
pub use collector::{EventCollector, LogEvent};
pub use pipeline::{Pipeline, ScanOutput, ScanSummary};
pub use scanner::{LineScanner, Lines};
pub use timestamp::TimestampExtractor;
