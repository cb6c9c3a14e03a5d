//! Logging around startup and command execution

mod support;

use std::time::Duration;

use agendar_domain::Config;
use agendar_lib::load_config_with;
use agendar_lib::utils::logging::log_command_execution;
use support::SharedBuffer;

/// Validates that configuration loading is logged before the global
/// subscriber exists.
///
/// Assertions:
/// - with no environment and no config file the defaults are used
/// - the fallback warning reaches the startup writer
#[test]
fn config_fallback_warning_is_logged_at_startup() {
    std::env::remove_var("AGENDAR_WHATSAPP_NUMBER");
    let buffer = SharedBuffer::default();

    let config = load_config_with(buffer.clone()).expect("defaults load");

    assert_eq!(config, Config::default());
    let logs = buffer.contents();
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("No configuration file found; using built-in defaults"), "{logs}");
}

#[test]
fn command_execution_logs_command_and_duration() {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        log_command_execution("booking::submit_booking", Duration::from_millis(7), true);
        log_command_execution("booking::new_booking", Duration::from_millis(1), false);
    });

    let logs = buffer.contents();
    assert!(logs.contains("command_execution_success"));
    assert!(logs.contains("booking::submit_booking"));
    assert!(logs.contains("duration_ms=7"));
    assert!(logs.contains("command_execution_failure"));
    assert!(!logs.contains("implementation"));
}
