//! Application context - dependency injection container

use std::sync::Arc;

use agendar_common::time::{Clock, SystemClock};
use agendar_core::{BookingFlow, BookingGateway, BookingProcessor, ProcessorSettings};
use agendar_domain::{Config, Result};
use agendar_infra::config;
use agendar_infra::LoggingBookingGateway;
use tracing_subscriber::fmt::MakeWriter;

use crate::utils::logging::bootstrap_subscriber;

/// Load the office configuration, logging to stderr while doing so
///
/// # Errors
/// Returns `AgendarError::Config` when configuration cannot be loaded.
pub fn load_config() -> Result<Config> {
    load_config_with(std::io::stderr)
}

/// [`load_config`] with the startup log sent to `make_writer`
///
/// The global subscriber depends on the loaded configuration, so loading
/// runs under a scoped [`bootstrap_subscriber`].
///
/// # Errors
/// Returns `AgendarError::Config` when configuration cannot be loaded.
pub fn load_config_with<W>(make_writer: W) -> Result<Config>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing::subscriber::with_default(bootstrap_subscriber(make_writer), config::load)
}

/// Application context - holds the booking flow and its configuration
pub struct AppContext {
    pub config: Config,
    pub flow: BookingFlow,
}

impl AppContext {
    /// Create a new application context with custom configuration
    ///
    /// # Errors
    /// Returns `AgendarError::Config` when the configured time zone is
    /// unknown.
    pub fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_parts(config, Arc::new(SystemClock), Arc::new(LoggingBookingGateway::new()))
    }

    /// Create a context with an injected clock and gateway
    ///
    /// Tests use this to pin "today" and capture outbound payloads.
    ///
    /// # Errors
    /// Returns `AgendarError::Config` when the configured time zone is
    /// unknown.
    pub fn new_with_parts(
        config: Config,
        clock: Arc<dyn Clock>,
        gateway: Arc<dyn BookingGateway>,
    ) -> Result<Self> {
        let settings = ProcessorSettings::from_config(&config)?;
        tracing::info!(
            timezone = %settings.calendar.timezone,
            policy = %settings.policy,
            areas = settings.areas.len(),
            "Booking processor configured"
        );

        let flow = BookingFlow::new(BookingProcessor::new(settings, clock, gateway));
        Ok(Self { config, flow })
    }
}
