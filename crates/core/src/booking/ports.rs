//! Port interfaces for booking processing
//!
//! These traits define the boundaries between core business logic
//! and infrastructure or UI implementations.

use agendar_domain::{
    AgendaEntry, BookingLinks, BookingSummary, IntegrationPayload, Result, UiState,
};
use async_trait::async_trait;

/// Trait for handing an accepted booking to the office's backend
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Deliver the payload for an accepted booking
    async fn send(&self, payload: &IntegrationPayload) -> Result<()>;
}

/// UI binding for the booking screen
///
/// Implementations only render; every decision is taken by
/// [`crate::BookingFlow`].
pub trait BookingView: Send + Sync {
    /// Replace the phone field's displayed value
    fn set_phone(&self, masked: &str);

    /// Show the panel for `state` and hide the other one
    fn show_state(&self, state: UiState);

    /// Render the confirmation summary
    fn render_summary(&self, summary: &BookingSummary);

    /// Point the WhatsApp and calendar anchors at the generated links
    fn set_links(&self, links: &BookingLinks);

    /// Make the office agenda panel visible
    fn show_agenda(&self);

    /// Append one line to the office agenda
    fn append_agenda_entry(&self, entry: &AgendaEntry);

    /// Clear every form field
    fn reset_form(&self);

    /// Blocking message for a rejected submission
    fn alert(&self, message: &str);
}
