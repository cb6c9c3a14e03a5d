//! Domain types and models

pub mod booking;
pub mod ui;

pub use booking::{
    AgendaEntry, BookingForm, BookingLinks, BookingRequest, BookingSummary, Confirmation,
    IntegrationPayload,
};
pub use ui::{UiEvent, UiState};
