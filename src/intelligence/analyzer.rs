/// Pattern analysis over a finished day of events
///
/// Pure function of its input: same events in, same result out.

use crate::core::{CommandCategory, LogEvent};
use crate::intelligence::insights::Insight;
use crate::intelligence::scorer::Scorer;
use chrono::Duration;
use std::collections::BTreeMap;

/// Counters the insight rules and the summary are built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedCounts {
    pub git: usize,
    pub cargo: usize,
    pub edit: usize,
    pub exploration: usize,
}

/// Everything the report needs
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub frequency_by_category: BTreeMap<CommandCategory, usize>,
    pub operations_by_category: BTreeMap<CommandCategory, BTreeMap<String, usize>>,
    pub first_event: Option<LogEvent>,
    pub last_event: Option<LogEvent>,
    pub total_count: usize,
    pub counts: DerivedCounts,
    pub insights: Vec<Insight>,
    pub productivity_score: f64,
}

impl AnalysisResult {
    pub fn count(&self, category: CommandCategory) -> usize {
        self.frequency_by_category
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    /// Categories by descending count. Ties keep classifier priority order.
    pub fn ranked_frequencies(&self) -> Vec<(CommandCategory, usize)> {
        let mut ranked: Vec<_> = self
            .frequency_by_category
            .iter()
            .map(|(category, count)| (*category, *count))
            .collect();
        // Stable sort over an already category-ordered list
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Time between the first and last command of the day
    pub fn active_span(&self) -> Option<Duration> {
        match (&self.first_event, &self.last_event) {
            (Some(first), Some(last)) => Some(last.timestamp - first.timestamp),
            _ => None,
        }
    }
}

/// Main analyzer
pub struct Analyzer;

impl Analyzer {
    /// Run full analysis
    pub fn analyze(events: &[LogEvent]) -> AnalysisResult {
        let mut frequency_by_category: BTreeMap<CommandCategory, usize> = BTreeMap::new();
        let mut operations_by_category: BTreeMap<CommandCategory, BTreeMap<String, usize>> =
            BTreeMap::new();

        for event in events {
            *frequency_by_category.entry(event.category).or_insert(0) += 1;

            if let Some(operation) = &event.operation {
                *operations_by_category
                    .entry(event.category)
                    .or_default()
                    .entry(operation.clone())
                    .or_insert(0) += 1;
            }
        }

        // min_by_key keeps the earliest of equal minimums, max_by_key the latest
        // of equal maximums
        let first_event = events.iter().min_by_key(|e| e.timestamp).cloned();
        let last_event = events.iter().max_by_key(|e| e.timestamp).cloned();

        let count = |category: CommandCategory| {
            frequency_by_category.get(&category).copied().unwrap_or(0)
        };
        let counts = DerivedCounts {
            git: count(CommandCategory::Git),
            cargo: count(CommandCategory::Cargo),
            edit: count(CommandCategory::Editor),
            exploration: CommandCategory::ALL
                .iter()
                .filter(|c| c.is_exploration())
                .map(|c| count(*c))
                .sum(),
        };

        let total_count = events.len();
        let insights = Insight::derive(&counts, total_count);
        let productivity_score = Scorer::productivity_score(total_count, counts.git, counts.cargo);

        AnalysisResult {
            frequency_by_category,
            operations_by_category,
            first_event,
            last_event,
            total_count,
            counts,
            insights,
            productivity_score,
        }
    }
}
