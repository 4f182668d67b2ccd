//! Tracing subscriber setup.
//!
//! The library only emits events; applications and tests call [`init`]
//! to see them.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants::LOG_ENV;

/// Install a global subscriber filtered by `AGEWRAP_LOG`.
///
/// Falls back to `agewrap=debug` when `verbose` is set and `agewrap=warn`
/// otherwise. Does nothing if a subscriber is already installed.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("agewrap=debug")
        } else {
            EnvFilter::new("agewrap=warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .try_init();
}
