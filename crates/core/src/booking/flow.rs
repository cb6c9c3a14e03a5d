//! Drives a [`BookingView`] from UI events

use agendar_domain::{AgendaEntry, AgendarError, BookingForm, Confirmation, Result, UiState};
use parking_lot::Mutex;
use tracing::{info, warn};

use super::ports::BookingView;
use super::service::BookingProcessor;
use crate::session::BookingSession;

fn form_not_open() -> AgendarError {
    AgendarError::InvalidInput("booking form is not open".into())
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub confirmation: Confirmation,
    pub entry: AgendaEntry,
    pub state: UiState,
}

/// Booking screen controller
///
/// The session lock is only taken in synchronous sections, never across
/// the gateway call.
pub struct BookingFlow {
    processor: BookingProcessor,
    session: Mutex<BookingSession>,
}

impl BookingFlow {
    pub fn new(processor: BookingProcessor) -> Self {
        Self { processor, session: Mutex::new(BookingSession::new()) }
    }

    pub fn processor(&self) -> &BookingProcessor {
        &self.processor
    }

    pub fn state(&self) -> UiState {
        self.session.lock().state()
    }

    pub fn agenda(&self) -> Vec<AgendaEntry> {
        self.session.lock().agenda().to_vec()
    }

    /// Re-mask the phone field after each keystroke
    pub fn on_phone_input(&self, raw: &str, view: &dyn BookingView) -> String {
        let masked = self.processor.mask_phone(raw);
        view.set_phone(&masked);
        masked
    }

    /// Handle the form's submit event
    ///
    /// A rejection raises an alert and leaves the view and session as they
    /// were.
    ///
    /// # Errors
    /// Returns the rejection raised by the processor, or
    /// `AgendarError::InvalidInput` when the form is not showing.
    pub async fn on_submit(
        &self,
        form: &BookingForm,
        view: &dyn BookingView,
    ) -> Result<SubmissionOutcome> {
        if self.state() != UiState::Form {
            return Err(form_not_open());
        }

        let confirmation = match self.processor.submit(form).await {
            Ok(confirmation) => confirmation,
            Err(err) => {
                warn!(error = %err, "Booking submission rejected");
                view.alert(&err.user_message());
                return Err(err);
            }
        };

        let (entry, state, first_entry) = {
            let mut session = self.session.lock();
            // Checked again: another submission may have confirmed during the gateway call.
            if session.state() != UiState::Form {
                warn!("Form closed while the booking was being sent; not recorded");
                return Err(form_not_open());
            }
            let entry = session.record(&confirmation);
            (entry, session.state(), session.agenda().len() == 1)
        };

        view.render_summary(&confirmation.summary);
        view.set_links(&confirmation.links);
        if first_entry {
            view.show_agenda();
        }
        view.append_agenda_entry(&entry);
        view.reset_form();
        view.show_state(state);

        info!(sequence = entry.sequence, "Booking confirmed");
        Ok(SubmissionOutcome { confirmation, entry, state })
    }

    /// Handle the "new booking" button
    pub fn on_new_booking(&self, view: &dyn BookingView) -> UiState {
        let state = self.session.lock().start_new_booking();
        view.show_state(state);
        state
    }
}
