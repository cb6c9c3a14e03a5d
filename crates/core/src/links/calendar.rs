//! Google Calendar "add event" template link
//!
//! The event starts at the booking's date and time in the office zone and
//! lasts a fixed number of minutes. Both instants are sent in UTC.

use agendar_domain::constants::{
    CALENDAR_TEMPLATE_URL, CALENDAR_TIMESTAMP_FORMAT, INVALID_DATE_MARKER,
};
use agendar_domain::{parse_local_datetime, BookingRequest, OfficeTimeZone};
use chrono::{DateTime, Duration, Utc};

/// Office-side settings for generated calendar events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventSettings {
    pub title_prefix: String,
    pub duration_minutes: u32,
    pub location: String,
    pub timezone: OfficeTimeZone,
}

/// `YYYYMMDDTHHMMSSZ`
pub fn format_calendar_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(CALENDAR_TIMESTAMP_FORMAT).to_string()
}

/// Start and end of the event, `None` when the date or time does not parse
pub fn event_window(
    booking: &BookingRequest,
    settings: &CalendarEventSettings,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let local = parse_local_datetime(&booking.date, &booking.time)?;
    let start = settings.timezone.to_utc(local)?;
    let end = start + Duration::minutes(i64::from(settings.duration_minutes));
    Some((start, end))
}

/// Value of the `dates` query parameter
///
/// An unparseable date or time yields the invalid-date marker for both ends
/// rather than an error.
pub fn calendar_dates(booking: &BookingRequest, settings: &CalendarEventSettings) -> String {
    match event_window(booking, settings) {
        Some((start, end)) => {
            format!("{}/{}", format_calendar_timestamp(start), format_calendar_timestamp(end))
        }
        None => {
            let marker = urlencoding::encode(INVALID_DATE_MARKER);
            format!("{marker}/{marker}")
        }
    }
}

fn event_details(booking: &BookingRequest) -> String {
    format!(
        "Cliente: {}\nÁrea: {}\nTelefone: {}\nE-mail: {}\nObservações: {}",
        booking.name, booking.area, booking.phone, booking.email, booking.notes
    )
}

/// Build the template link for `booking`
pub fn build_calendar_link(booking: &BookingRequest, settings: &CalendarEventSettings) -> String {
    let title = format!("{} - {}", settings.title_prefix, booking.name);

    format!(
        "{CALENDAR_TEMPLATE_URL}&text={}&dates={}&details={}&location={}",
        urlencoding::encode(&title),
        calendar_dates(booking, settings),
        urlencoding::encode(&event_details(booking)),
        urlencoding::encode(&settings.location),
    )
}
