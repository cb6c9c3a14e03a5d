//! UI state machine
//!
//! The booking screen has exactly two panels. Every transition goes through
//! [`UiState::transition`].

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_enum_conversions;

/// Which panel is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum UiState {
    /// Booking form visible, confirmation hidden
    #[default]
    Form,
    /// Form hidden; summary, links and the new-booking button visible
    Confirmed,
}

/// User actions that can move the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// A submission passed validation
    Submitted,
    /// The "new booking" button was pressed
    NewBookingRequested,
}

impl UiState {
    /// Next state for `event`; unknown pairs keep the current state.
    #[must_use]
    pub fn transition(self, event: UiEvent) -> Self {
        match (self, event) {
            (Self::Form, UiEvent::Submitted) => Self::Confirmed,
            (Self::Confirmed, UiEvent::NewBookingRequested) => Self::Form,
            (state, _) => state,
        }
    }

    pub fn form_visible(self) -> bool {
        matches!(self, Self::Form)
    }

    pub fn confirmation_visible(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl_domain_enum_conversions!(UiState {
    Form => "form",
    Confirmed => "confirmed",
});
