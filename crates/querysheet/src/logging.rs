//! Diagnostic logging for the binary.
//!
//! Library code only emits `tracing` events; this module installs the
//! subscriber. Logs go to stderr so stdout stays clean for results.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Directive used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter from an explicit level, then `RUST_LOG`, then the default.
pub fn filter_for(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|err| anyhow!("invalid log directive '{directive}': {err}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))),
    }
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Fails on an invalid directive or when a subscriber is already installed.
pub fn init(level: Option<&str>) -> Result<()> {
    let filter = filter_for(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_levels_parse() {
        for level in ["trace", "debug", "info", "warn", "error", "querysheet=debug"] {
            assert!(filter_for(Some(level)).is_ok(), "{level} should parse");
        }
    }

    #[test]
    fn default_filter_is_available() {
        assert!(filter_for(None).is_ok());
    }
}
