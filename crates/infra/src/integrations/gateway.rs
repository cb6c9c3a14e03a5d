//! Stand-in booking backend
//!
//! There is no booking API yet. The gateway serializes the payload the
//! backend would receive and records it in the log under
//! [`INTEGRATION_LOG_TARGET`].

use agendar_core::BookingGateway;
use agendar_domain::{AgendarError, IntegrationPayload, Result};
use async_trait::async_trait;
use tracing::info;

/// Log target for outbound booking payloads
pub const INTEGRATION_LOG_TARGET: &str = "agendar::integration";

/// Gateway that logs each payload instead of sending it
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBookingGateway;

impl LoggingBookingGateway {
    /// Create a new gateway instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// JSON document for `payload`
    ///
    /// # Errors
    /// Returns `AgendarError::Integration` when serialization fails.
    pub fn render(payload: &IntegrationPayload) -> Result<String> {
        serde_json::to_string(payload)
            .map_err(|e| AgendarError::Integration(format!("failed to serialize payload: {e}")))
    }
}

#[async_trait]
impl BookingGateway for LoggingBookingGateway {
    async fn send(&self, payload: &IntegrationPayload) -> Result<()> {
        let body = Self::render(payload)?;

        info!(
            target: INTEGRATION_LOG_TARGET,
            booking_id = %payload.id,
            endpoint = %payload.endpoint,
            whatsapp_link = %payload.links.whatsapp,
            calendar_link = %payload.links.calendar,
            payload = %body,
            "Booking payload ready for backend"
        );
        Ok(())
    }
}
