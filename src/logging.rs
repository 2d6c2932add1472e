/// Tracing setup
///
/// Diagnostics go to stderr so the report on stdout stays readable.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter directive for both the library and the binary target.
fn filter_directive(level: &str) -> String {
    let bin = env!("CARGO_PKG_NAME").replace('-', "_");
    format!("{bin}_lib={level},{bin}={level}")
}

pub fn enable_logging(log_level: Option<LevelFilter>) -> anyhow::Result<()> {
    let level = log_level
        .map(|v| v.to_string().to_lowercase())
        .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LEVEL.into()));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter_directive(&level))?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;
    Ok(())
}

#[cfg(test)]
pub static TEST_LOGGING: std::sync::LazyLock<()> = std::sync::LazyLock::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        let directive = filter_directive("debug");
        assert_eq!(directive, "warp_digest_lib=debug,warp_digest=debug");
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
