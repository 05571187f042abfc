//! Structured logging setup for binaries embedding the board.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host process.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = tracing_subscriber::util::TryInitError;

/// Installs a stderr `fmt` subscriber filtered by [`LOG_LEVEL_ENV`].
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber has already been
/// installed.
pub fn init_tracing() -> Result<(), TelemetryError> {
    let level = std::env::var(LOG_LEVEL_ENV).ok();
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_log_filter(level.as_deref()))
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}

fn build_log_filter(raw_level: Option<&str>) -> EnvFilter {
    let level = raw_level
        .and_then(normalize_log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    EnvFilter::new(format!("{level},taskboard={level}"))
}

fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}
