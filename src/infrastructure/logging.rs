//! Tracing setup for the yamltag binary

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "YAMLTAG_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "yamltag=debug";

/// Pick the filter directive: the environment wins, then `-v`, then the default
pub fn filter_directive(env_value: Option<&str>, verbose: bool) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if verbose => VERBOSE_LOG_FILTER.to_string(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install a stderr subscriber. Output goes to stderr so stdout stays clean.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(env_value.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid {} filter: {}", LOG_ENV_VAR, directive))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_wins() {
        assert_eq!(filter_directive(Some("yamltag=trace"), false), "yamltag=trace");
        assert_eq!(filter_directive(Some("yamltag=trace"), true), "yamltag=trace");
    }

    #[test]
    fn test_verbose_and_default() {
        assert_eq!(filter_directive(None, true), VERBOSE_LOG_FILTER);
        assert_eq!(filter_directive(None, false), DEFAULT_LOG_FILTER);
        assert_eq!(filter_directive(Some("  "), false), DEFAULT_LOG_FILTER);
    }
}
