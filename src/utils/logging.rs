//! Tracing subscriber setup for binaries. Library code only emits events.

use crate::core::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` (or [`DEFAULT_LOG_FILTER`]). Returns false if a
/// subscriber was already installed.
pub fn init_logging(default_filter: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.unwrap_or(DEFAULT_LOG_FILTER).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
