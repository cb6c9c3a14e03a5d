//! Booking screen commands

use std::time::Instant;

use agendar_core::{BookingView, SubmissionOutcome};
use agendar_domain::{AgendaEntry, BookingForm, Result, UiState};
use tracing::info;

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Mask the phone field after each keystroke
pub fn mask_phone(ctx: &AppContext, view: &dyn BookingView, raw: &str) -> String {
    ctx.flow.on_phone_input(raw, view)
}

/// Submit the booking form
///
/// # Errors
/// Returns the rejection when the form is blocked. The view has already
/// shown the alert.
pub async fn submit_booking(
    ctx: &AppContext,
    view: &dyn BookingView,
    form: &BookingForm,
) -> Result<SubmissionOutcome> {
    let command_name = "booking::submit_booking";
    let start = Instant::now();

    info!(
        command = command_name,
        policy = %ctx.flow.processor().settings().policy,
        area = %form.area,
        date = %form.date,
        "Submitting booking"
    );

    let result = ctx.flow.on_submit(form, view).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    log_command_execution(command_name, elapsed, success);
    if let Err(err) = &result {
        info!(command = command_name, error_type = error_label(err), "Booking not accepted");
    }

    result
}

/// Go back to an empty form after a confirmation
pub fn new_booking(ctx: &AppContext, view: &dyn BookingView) -> UiState {
    let command_name = "booking::new_booking";
    let start = Instant::now();

    info!(command = command_name, "Starting new booking");
    let state = ctx.flow.on_new_booking(view);

    log_command_execution(command_name, start.elapsed(), true);
    state
}

/// Bookings confirmed in this session, in order
pub fn list_agenda(ctx: &AppContext) -> Vec<AgendaEntry> {
    ctx.flow.agenda()
}

/// Current screen state
pub fn current_state(ctx: &AppContext) -> UiState {
    ctx.flow.state()
}
