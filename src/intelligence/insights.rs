// Threshold rules that turn counts into short observations
//
// The numbers below are the long-standing ones from the daily reports.
// Keep them as they are; people compare reports across days.

use crate::intelligence::analyzer::DerivedCounts;
use std::fmt;

const HIGH_GIT_THRESHOLD: usize = 5;
const INTENSIVE_CARGO_THRESHOLD: usize = 3;
const HIGH_EXPLORATION_THRESHOLD: usize = 10;

const HIGH_ACTIVITY_THRESHOLD: usize = 100;
const GOOD_SESSION_THRESHOLD: usize = 50;
const MODERATE_ACTIVITY_THRESHOLD: usize = 20;

/// Overall activity level for the day. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTier {
    High,
    Good,
    Moderate,
    Light,
}

impl ActivityTier {
    pub fn from_total(total: usize) -> Self {
        if total > HIGH_ACTIVITY_THRESHOLD {
            ActivityTier::High
        } else if total > GOOD_SESSION_THRESHOLD {
            ActivityTier::Good
        } else if total > MODERATE_ACTIVITY_THRESHOLD {
            ActivityTier::Moderate
        } else {
            ActivityTier::Light
        }
    }
}

impl fmt::Display for ActivityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityTier::High => write!(f, "high activity"),
            ActivityTier::Good => write!(f, "good session"),
            ActivityTier::Moderate => write!(f, "moderate activity"),
            ActivityTier::Light => write!(f, "light activity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    HighVersionControl,
    IntensiveBuild,
    EditingSession { count: usize },
    HighExploration,
    Activity(ActivityTier),
}

impl Insight {
    /// Evaluate every rule in order. The activity tier always comes last.
    pub fn derive(counts: &DerivedCounts, total: usize) -> Vec<Insight> {
        let mut insights = Vec::new();

        if counts.git > HIGH_GIT_THRESHOLD {
            insights.push(Insight::HighVersionControl);
        }

        if counts.cargo > INTENSIVE_CARGO_THRESHOLD {
            insights.push(Insight::IntensiveBuild);
        }

        if counts.edit > 0 {
            insights.push(Insight::EditingSession { count: counts.edit });
        }

        if counts.exploration > HIGH_EXPLORATION_THRESHOLD {
            insights.push(Insight::HighExploration);
        }

        insights.push(Insight::Activity(ActivityTier::from_total(total)));
        insights
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::HighVersionControl => {
                write!(f, "High git activity - active version control usage")
            }
            Insight::IntensiveBuild => {
                write!(f, "Multiple cargo builds - intensive Rust development")
            }
            Insight::EditingSession { count } => {
                write!(f, "Code editing sessions detected ({} instances)", count)
            }
            Insight::HighExploration => {
                write!(f, "High exploration activity - discovering project structure")
            }
            Insight::Activity(ActivityTier::High) => {
                write!(f, "High activity day - significant development work!")
            }
            Insight::Activity(ActivityTier::Good) => write!(f, "Good productive session"),
            Insight::Activity(ActivityTier::Moderate) => {
                write!(f, "Moderate development activity")
            }
            Insight::Activity(ActivityTier::Light) => write!(f, "Light development activity"),
        }
    }
}
