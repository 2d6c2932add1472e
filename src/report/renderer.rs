// Console report for a day's analysis
//
// Layout: banner, frequency table, active time, insights, total, summary,
// closing banner. An empty day skips straight from banner to a notice.

use crate::core::ScanSummary;
use crate::intelligence::{ActivityTier, AnalysisResult, Insight};
use chrono::NaiveDate;
use std::fmt;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Run details shown in the banner
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub target_date: NaiveDate,
    pub log_path: &'a Path,
    pub scan: ScanSummary,
}

pub struct ReportRenderer<'a> {
    context: ReportContext<'a>,
    result: &'a AnalysisResult,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(context: ReportContext<'a>, result: &'a AnalysisResult) -> Self {
        Self { context, result }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_banner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🚀 Warp Digest - Development Intelligence")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "🔍 Day: {}", self.context.target_date)?;
        writeln!(f, "📁 Log file: {}", self.context.log_path.display())?;
        writeln!(
            f,
            "📈 Scanned {} lines, found {} commands",
            self.context.scan.lines_scanned, self.context.scan.events_collected
        )?;
        writeln!(f)
    }

    fn write_frequencies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Command Frequency:")?;
        for (category, count) in self.result.ranked_frequencies() {
            write!(f, "   {}: {}x", category, count)?;

            if let Some(operations) = self.result.operations_by_category.get(&category) {
                let breakdown: Vec<String> = operations
                    .iter()
                    .map(|(operation, n)| format!("{} {}", operation, n))
                    .collect();
                write!(f, " ({})", breakdown.join(", "))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }

    fn write_active_time(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(first), Some(last), Some(span)) = (
            &self.result.first_event,
            &self.result.last_event,
            self.result.active_span(),
        ) else {
            return Ok(());
        };

        writeln!(f, "⏰ Active Time Analysis:")?;
        writeln!(f, "   First command: {}", first.timestamp.format("%H:%M:%S"))?;
        writeln!(f, "   Last command: {}", last.timestamp.format("%H:%M:%S"))?;
        writeln!(
            f,
            "   Total span: {} hours {} minutes",
            span.num_hours(),
            span.num_minutes() % 60
        )?;
        writeln!(f)
    }

    fn write_insights(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "💡 Development Insights:")?;
        for insight in &self.result.insights {
            writeln!(f, "   {} {}", insight_icon(insight), insight)?;
        }
        writeln!(f, "   🎯 Total commands executed: {}", self.result.total_count)?;
        writeln!(f)
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = &self.result.counts;

        writeln!(f, "📋 Today's Development Summary:")?;
        writeln!(
            f,
            "   📊 Productivity Score: {:.1}/10",
            self.result.productivity_score
        )?;
        if counts.cargo > 0 {
            writeln!(f, "   🛠️  Build Activity: {} cargo commands", counts.cargo)?;
        }
        if counts.git > 0 {
            writeln!(f, "   📝 Version Control: {} git operations", counts.git)?;
        }
        if counts.exploration > 0 {
            writeln!(
                f,
                "   🔍 Code Exploration: {} navigation commands",
                counts.exploration
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ReportRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_banner(f)?;

        if self.result.total_count == 0 {
            writeln!(
                f,
                "❌ No commands found for {}",
                self.context.target_date
            )?;
            writeln!(f)?;
        } else {
            self.write_frequencies(f)?;
            self.write_active_time(f)?;
            self.write_insights(f)?;
            self.write_summary(f)?;
        }

        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "✅ Report complete")
    }
}

/// Status line shown while a large log is being scanned
pub fn progress_line(lines: usize) -> String {
    format!("📊 Processed {} lines...", lines)
}

fn insight_icon(insight: &Insight) -> &'static str {
    match insight {
        Insight::HighVersionControl => "🔧",
        Insight::IntensiveBuild => "🦀",
        Insight::EditingSession { .. } => "📝",
        Insight::HighExploration => "🔍",
        Insight::Activity(ActivityTier::High) => "🔥",
        Insight::Activity(ActivityTier::Good) => "💪",
        Insight::Activity(ActivityTier::Moderate) => "👍",
        Insight::Activity(ActivityTier::Light) => "🌱",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandCategory, LogEvent};
    use crate::intelligence::Analyzer;
    use chrono::{TimeZone, Utc};

    fn context(scan: ScanSummary) -> ReportContext<'static> {
        ReportContext {
            target_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            log_path: Path::new("/tmp/warp.log"),
            scan,
        }
    }

    fn event(minute: u32, category: CommandCategory, operation: Option<&str>) -> LogEvent {
        LogEvent {
            timestamp: Utc.with_ymd_and_hms(2025, 6, 30, 9, minute, 0).unwrap(),
            category,
            operation: operation.map(str::to_string),
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_render_sections_in_order() {
        let events = vec![
            event(0, CommandCategory::Git, Some("commit")),
            event(5, CommandCategory::Cargo, Some("build")),
            event(10, CommandCategory::List, None),
        ];
        let result = Analyzer::analyze(&events);
        let scan = ScanSummary {
            lines_scanned: 4,
            events_collected: 3,
        };

        let report = ReportRenderer::new(context(scan), &result).render();

        let order = [
            "Warp Digest",
            "Command Frequency",
            "Active Time Analysis",
            "Development Insights",
            "Total commands executed: 3",
            "Productivity Score: 1.6/10",
            "Report complete",
        ];
        let mut last = 0;
        for section in order {
            let pos = report[last..]
                .find(section)
                .unwrap_or_else(|| panic!("missing or out of order: {}", section));
            last += pos;
        }

        assert!(report.contains("git: 1x (commit 1)"));
        assert!(report.contains("list: 1x\n"));
        assert!(report.contains("First command: 09:00:00"));
        assert!(report.contains("Last command: 09:10:00"));
        assert!(report.contains("Total span: 0 hours 10 minutes"));
        assert!(report.contains("Light development activity"));
        assert!(report.contains("Build Activity: 1 cargo commands"));
        assert!(report.contains("Code Exploration: 1 navigation commands"));
    }

    #[test]
    fn test_render_empty_day() {
        let result = Analyzer::analyze(&[]);
        let report = ReportRenderer::new(context(ScanSummary::default()), &result).render();

        assert!(report.contains("No commands found for 2025-06-30"));
        assert!(!report.contains("Command Frequency"));
        assert!(!report.contains("Productivity Score"));
        assert!(report.contains("Report complete"));
    }

    #[test]
    fn test_summary_skips_zero_counts() {
        let events = vec![event(0, CommandCategory::Editor, Some("vim"))];
        let result = Analyzer::analyze(&events);
        let report = ReportRenderer::new(context(ScanSummary::default()), &result).render();

        assert!(!report.contains("Build Activity"));
        assert!(!report.contains("Version Control"));
        assert!(!report.contains("Code Exploration"));
        assert!(report.contains("Code editing sessions detected (1 instances)"));
    }

    #[test]
    fn test_progress_line_is_not_part_of_report() {
        assert_eq!(progress_line(10_000), "📊 Processed 10000 lines...");

        let result = Analyzer::analyze(&[]);
        let report = ReportRenderer::new(context(ScanSummary::default()), &result).render();
        assert!(report.starts_with("🚀 Warp Digest"));
        assert!(!report.contains("Processed"));
    }
}
