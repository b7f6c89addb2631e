//! Log output for the binary.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the program that owns stderr.

use std::io;

use lexc_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Resolves the effective filter directive.
///
/// An explicit filter wins, then the `LEXC_LOG` environment variable, then
/// the default.
#[must_use]
pub fn resolve_filter(explicit: Option<&str>) -> String {
    let given = |filter: &str| !filter.trim().is_empty();
    explicit
        .filter(|filter| given(filter))
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV_VAR).ok().filter(|filter| given(filter)))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Parses a filter directive, falling back to the default on bad input.
#[must_use]
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a compact stderr subscriber for `directive`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(directive: &str) -> Result<()> {
    fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("logging: {e}"))))
}
