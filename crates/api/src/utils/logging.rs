use std::time::Duration;

use agendar_domain::{AgendarError, LoggingConfig};
use tracing::{info, warn, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"booking::submit_booking"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding personal data in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert an `AgendarError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &AgendarError) -> &'static str {
    match error {
        AgendarError::Config(_) => "config",
        AgendarError::InvalidInput(_) => "invalid_input",
        AgendarError::PastDate(_) => "past_date",
        AgendarError::Integration(_) => "integration",
        AgendarError::Internal(_) => "internal",
    }
}

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Plain-text subscriber for startup, before the configuration that picks
/// the real one is known.
///
/// Honours `RUST_LOG`, otherwise logs at the default level.
pub fn bootstrap_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&LoggingConfig::default()))
        .with_target(true)
        .with_ansi(false)
        .with_writer(make_writer)
        .finish()
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config)).with_target(true);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
