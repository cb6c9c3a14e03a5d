//! Submission checks
//!
//! The past-date rule always applies. Field checks only run under
//! [`FormPolicy::Strict`].

use agendar_common::validation::{
    DigitCountValidator, EmailValidator, OneOfValidator, Validator,
};
use agendar_domain::{parse_local_date, AgendarError, BookingRequest, FormPolicy, Result};
use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

const TIME_FORMAT: &str = "%H:%M";

/// Reject a booking date strictly before `today`
///
/// A date that does not parse cannot be compared and is let through.
///
/// # Errors
/// Returns `AgendarError::PastDate` for a date before `today`.
pub fn validate_date(date_text: &str, today: NaiveDate) -> Result<()> {
    let Some(date) = parse_local_date(date_text) else {
        warn!(date = %date_text, "Booking date did not parse; skipping past-date check");
        return Ok(());
    };

    if date < today {
        return Err(AgendarError::PastDate(format!("{date} is before {today}")));
    }
    Ok(())
}

/// Field checks for `policy`
///
/// # Errors
/// Returns `AgendarError::InvalidInput` listing every failing field.
pub fn validate_form(booking: &BookingRequest, policy: FormPolicy, areas: &[String]) -> Result<()> {
    if policy == FormPolicy::Permissive {
        return Ok(());
    }

    let mut validator = Validator::new();

    for (field, value) in [
        ("name", &booking.name),
        ("phone", &booking.phone),
        ("area", &booking.area),
        ("date", &booking.date),
        ("time", &booking.time),
    ] {
        validator.require(field, value);
    }

    if !booking.phone.is_empty() {
        validator.check("phone", &booking.phone, &DigitCountValidator::between(10, 11));
    }
    if !booking.email.is_empty() {
        validator.check("email", &booking.email, &EmailValidator::new());
    }
    if !booking.date.is_empty() {
        validator.ensure("date", parse_local_date(&booking.date).is_some(), "must be YYYY-MM-DD");
    }
    if !booking.time.is_empty() {
        let parses = NaiveTime::parse_from_str(&booking.time, TIME_FORMAT).is_ok();
        validator.ensure("time", parses, "must be HH:MM");
    }
    if !booking.area.is_empty() {
        validator.check("area", &booking.area, &OneOfValidator::new(areas));
    }

    validator.finalize().map_err(|err| AgendarError::InvalidInput(err.to_string()))
}
