//! Per-session booking state
//!
//! Holds the current [`UiState`] and the agenda of bookings confirmed since
//! the session started. Nothing here outlives the process.

use agendar_domain::{AgendaEntry, Confirmation, UiEvent, UiState};

/// Screen state plus the session agenda
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSession {
    state: UiState,
    agenda: Vec<AgendaEntry>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn agenda(&self) -> &[AgendaEntry] {
        &self.agenda
    }

    /// Append the agenda line for `confirmation` and move to `Confirmed`
    pub fn record(&mut self, confirmation: &Confirmation) -> AgendaEntry {
        let sequence = u32::try_from(self.agenda.len() + 1).unwrap_or(u32::MAX);
        let entry = AgendaEntry::from_summary(sequence, &confirmation.summary);
        self.agenda.push(entry.clone());
        self.state = self.state.transition(UiEvent::Submitted);
        entry
    }

    /// Return to the form; the agenda is kept
    pub fn start_new_booking(&mut self) -> UiState {
        self.state = self.state.transition(UiEvent::NewBookingRequested);
        self.state
    }
}
