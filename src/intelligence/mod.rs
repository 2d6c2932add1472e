/// Intelligence module
///
/// Turns the day's events into counts, insights and a productivity score.

pub mod analyzer;
pub mod insights;
pub mod scorer;

pub use analyzer::{AnalysisResult, Analyzer, DerivedCounts};
pub use insights::{ActivityTier, Insight};
pub use scorer::Scorer;
