/// Run configuration
///
/// Everything the pipeline needs is carried here and handed to
/// `Pipeline::new`, so the core never looks at the environment itself.

use crate::error::{DigestError, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Where Warp writes its log, relative to the home directory
const DEFAULT_LOG_RELATIVE_PATH: &str = "Library/Logs/warp.log";

/// Report progress every this many lines
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub log_path: PathBuf,
    pub target_date: NaiveDate,
    pub progress_interval: usize,
}

impl AnalyzerConfig {
    pub fn new(log_path: impl Into<PathBuf>, target_date: NaiveDate) -> Self {
        Self {
            log_path: log_path.into(),
            target_date,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Config for the current local calendar date
    pub fn for_today(log_path: impl Into<PathBuf>) -> Self {
        Self::new(log_path, Local::now().date_naive())
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// `~/Library/Logs/warp.log`
    pub fn default_log_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            DigestError::Config("Could not determine home directory".to_string())
        })?;

        Ok(home.join(DEFAULT_LOG_RELATIVE_PATH))
    }

    /// Parse a `YYYY-MM-DD` date as given on the command line
    pub fn parse_date(input: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| DigestError::InvalidDate(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_interval() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let config = AnalyzerConfig::new("/tmp/warp.log", date);

        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
        assert_eq!(config.target_date, date);
        assert_eq!(config.log_path, PathBuf::from("/tmp/warp.log"));
    }

    #[test]
    fn test_with_progress_interval() {
        let config = AnalyzerConfig::for_today("/tmp/warp.log").with_progress_interval(5);
        assert_eq!(config.progress_interval, 5);
    }

    #[test]
    fn test_default_log_path() {
        // Only meaningful where a home directory exists
        if let Ok(path) = AnalyzerConfig::default_log_path() {
            assert!(path.ends_with("Library/Logs/warp.log"));
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            AnalyzerConfig::parse_date("2025-06-30").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );

        match AnalyzerConfig::parse_date("2025-02-30") {
            Err(DigestError::InvalidDate(input)) => assert_eq!(input, "2025-02-30"),
            _ => panic!("Expected InvalidDate error"),
        }

        assert!(AnalyzerConfig::parse_date("yesterday").is_err());
    }
}
