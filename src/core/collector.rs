/// Event collection
///
/// Turns a stream of lines into the day's list of matched command events,
/// keeping file order.

use crate::core::classifier::{CommandCategory, CommandClassifier};
use crate::core::timestamp::TimestampExtractor;
use chrono::{DateTime, NaiveDate, Utc};

/// One matched command occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub category: CommandCategory,
    pub operation: Option<String>,
    pub raw_text: String,
}

pub struct EventCollector {
    target_date: NaiveDate,
    extractor: TimestampExtractor,
    classifier: CommandClassifier,
    events: Vec<LogEvent>,
    lines_seen: usize,
}

impl EventCollector {
    pub fn new(target_date: NaiveDate) -> Self {
        Self {
            target_date,
            extractor: TimestampExtractor::new(),
            classifier: CommandClassifier::new(),
            events: Vec::new(),
            lines_seen: 0,
        }
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Feed one line. Returns true if it produced an event.
    ///
    /// Lines with no usable timestamp, from another day, or that match no
    /// signature are dropped silently.
    pub fn push_line(&mut self, line: &str) -> bool {
        self.lines_seen += 1;

        let Some(timestamp) = self.extractor.extract(line) else {
            return false;
        };

        if timestamp.date_naive() != self.target_date {
            return false;
        }

        let Some(classification) = self.classifier.classify(line) else {
            return false;
        };

        self.events.push(LogEvent {
            timestamp,
            category: classification.category,
            operation: classification.operation,
            raw_text: line.trim().to_string(),
        });
        true
    }

    /// Hand the collected events over. The collector is consumed.
    pub fn finish(self) -> Vec<LogEvent> {
        self.events
    }
}
