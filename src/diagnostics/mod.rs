// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! All modules log through `tracing` macros. The subscriber installed here
//! writes them to stderr, filtered by level.
//!
//! # Level Resolution
//!
//! 1. `RUST_LOG` if set and valid
//! 2. `[diagnostics] log_level` from the settings file
//! 3. [`DEFAULT_LOG_LEVEL`](crate::config::DEFAULT_LOG_LEVEL)

use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Builds the level filter following the resolution order above.
#[must_use]
pub fn build_filter(config_level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    config_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(config_level: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_ok() {
        tracing::debug!("tracing initialized");
    }
}
