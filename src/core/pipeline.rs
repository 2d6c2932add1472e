// Scanner -> extractor -> classifier -> collector, wired up for one run
//
// Takes an explicit config so tests can point it anywhere, or skip the
// filesystem entirely with `collect_from`.

use crate::config::AnalyzerConfig;
use crate::core::collector::{EventCollector, LogEvent};
use crate::core::scanner::{LineScanner, Lines};
use crate::error::Result;
use std::io::BufRead;
use tracing::{debug, info};

/// What a scan went through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub lines_scanned: usize,
    pub events_collected: usize,
}

/// Events in file order plus scan counts
pub type ScanOutput = (Vec<LogEvent>, ScanSummary);

pub struct Pipeline {
    config: AnalyzerConfig,
}

impl Pipeline {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scan the configured log file
    pub fn run(&self) -> Result<ScanOutput> {
        self.run_with_progress(|_| {})
    }

    /// Scan the configured log file, calling `on_progress` with the running
    /// line count every `progress_interval` lines
    pub fn run_with_progress<F>(&self, on_progress: F) -> Result<ScanOutput>
    where
        F: FnMut(usize),
    {
        info!(
            "Scanning {} for {}",
            self.config.log_path.display(),
            self.config.target_date
        );

        let lines = LineScanner::new(&self.config.log_path).open()?;
        self.collect(lines, on_progress)
    }

    /// Same as `run_with_progress`, over any buffered reader
    pub fn collect_from<R, F>(&self, reader: R, on_progress: F) -> Result<ScanOutput>
    where
        R: BufRead,
        F: FnMut(usize),
    {
        self.collect(Lines::new(reader, &self.config.log_path), on_progress)
    }

    fn collect<R, F>(&self, lines: Lines<R>, mut on_progress: F) -> Result<ScanOutput>
    where
        R: BufRead,
        F: FnMut(usize),
    {
        let mut collector = EventCollector::new(self.config.target_date);
        let interval = self.config.progress_interval;

        for line in lines {
            collector.push_line(&line?);

            let seen = collector.lines_seen();
            if interval > 0 && seen % interval == 0 {
                on_progress(seen);
            }
        }

        let lines_scanned = collector.lines_seen();
        let events = collector.finish();
        let summary = ScanSummary {
            lines_scanned,
            events_collected: events.len(),
        };

        debug!(
            "Scanned {} lines, kept {} events",
            summary.lines_scanned, summary.events_collected
        );

        Ok((events, summary))
    }
}
