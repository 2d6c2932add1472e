/// Timestamp extraction
///
/// Finds the first `YYYY-MM-DDTHH:MM:SS` substring in a line and reads it as UTC.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use regex::Regex;

// ASCII digits only; \d would also accept other scripts' digits
const TIMESTAMP_PATTERN: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct TimestampExtractor {
    regex: Regex,
}

impl TimestampExtractor {
    pub fn new() -> Self {
        Self {
            // Constant pattern, covered by tests
            regex: Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"),
        }
    }

    /// Returns the leftmost timestamp in the line, or `None`.
    ///
    /// A substring that has the right shape but is not a real date/time
    /// (month 13, Feb 30, second 60, ...) counts as no timestamp. Later
    /// matches in the same line are not tried.
    pub fn extract(&self, line: &str) -> Option<DateTime<Utc>> {
        let found = self.regex.find(line)?;

        NaiveDateTime::parse_from_str(found.as_str(), TIMESTAMP_FORMAT)
            .ok()
            // chrono reads :60 as a leap second; seconds stop at 59 here
            .filter(|naive| naive.nanosecond() < 1_000_000_000)
            .map(|naive| naive.and_utc())
    }
}

impl Default for TimestampExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_extracts_timestamp() {
        let extractor = TimestampExtractor::new();

        let ts = extractor
            .extract("[INFO] 2025-06-30T09:05:00.123Z warp::terminal cargo build")
            .unwrap();

        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 30, 9, 5, 0).unwrap());
    }

    #[test]
    fn test_no_timestamp() {
        let extractor = TimestampExtractor::new();

        assert!(extractor.extract("git commit -m 'no time here'").is_none());
        assert!(extractor.extract("2025-06-30 09:00:00 space instead of T").is_none());
        assert!(extractor.extract("").is_none());
    }

    #[test]
    fn test_malformed_timestamp_is_absent() {
        let extractor = TimestampExtractor::new();

        assert!(extractor.extract("2025-13-45T09:00:00 git status").is_none());
        assert!(extractor.extract("2025-02-30T09:00:00 git status").is_none());
        assert!(extractor.extract("2025-06-30T25:00:00 git status").is_none());
        assert!(extractor.extract("2025-06-30T09:00:60 git status").is_none());
        assert!(extractor.extract("2025-06-30T23:59:60 git status").is_none());
    }

    #[test]
    fn test_only_leftmost_match_counts() {
        let extractor = TimestampExtractor::new();

        let ts = extractor
            .extract("2025-06-30T09:00:00 replayed from 2025-07-01T10:00:00")
            .unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 30, 9, 0, 0).unwrap());

        // Leftmost is invalid, the valid one after it is ignored
        assert!(extractor
            .extract("2025-99-99T09:00:00 then 2025-06-30T09:00:00")
            .is_none());
    }
}
