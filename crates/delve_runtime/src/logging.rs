//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with game text on stdout.
//! `RUST_LOG` wins over the configured filter.

use delve_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--log` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Parses a filter directive string.
///
/// # Errors
///
/// Returns an error if the directives are malformed.
pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| Error::invalid_argument(format!("log filter {directives:?}: {e}")))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the fallback filter is malformed or a subscriber is
/// already installed.
pub fn init(fallback: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(fallback.unwrap_or(DEFAULT_FILTER))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::internal(format!("logging already initialised: {e}")))
}
