//! Global tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured `LOG_LEVEL` applies to
//! every target. `LOG_FORMAT` picks JSON lines or human-readable output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LogLevel};

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`TryInitError`] if a global subscriber is already installed.
pub fn init(level: LogLevel, format: LogFormat) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(level));
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Console => registry.with(fmt::layer()).try_init(),
    }
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.filter_directive()))
}
