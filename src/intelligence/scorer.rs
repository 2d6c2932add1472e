/// Productivity scoring
///
/// A rough 0-10 number for the day, weighted toward builds and commits.

/// Scorer for the daily productivity score
pub struct Scorer;

const TOTAL_DIVISOR: f64 = 10.0;
const GIT_WEIGHT: f64 = 0.5;
const CARGO_WEIGHT: f64 = 0.8;
pub const MAX_SCORE: f64 = 10.0;

impl Scorer {
    /// Calculate the productivity score
    ///
    /// # Arguments
    /// * `total` - Number of classified commands for the day
    /// * `git` - Number of git commands
    /// * `cargo` - Number of cargo commands
    ///
    /// # Returns
    /// * Score between 0.0 and 10.0, capped exactly at 10.0
    pub fn productivity_score(total: usize, git: usize, cargo: usize) -> f64 {
        let raw = total as f64 / TOTAL_DIVISOR
            + git as f64 * GIT_WEIGHT
            + cargo as f64 * CARGO_WEIGHT;

        raw.min(MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Scorer::productivity_score(0, 0, 0), 0.0);
    }

    #[test]
    fn test_weights() {
        let score = Scorer::productivity_score(3, 1, 1);
        assert!((score - 1.6).abs() < 1e-9);

        let score = Scorer::productivity_score(20, 0, 0);
        assert_eq!(score, 2.0);
    }

    #[test]
    fn test_cap() {
        assert_eq!(Scorer::productivity_score(500, 50, 50), MAX_SCORE);
        assert_eq!(Scorer::productivity_score(100, 0, 0), MAX_SCORE);
        assert!(Scorer::productivity_score(99, 0, 0) < MAX_SCORE);
    }
}
