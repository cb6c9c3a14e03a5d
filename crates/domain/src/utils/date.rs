//! Date text handling for the booking form.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Reorder `YYYY-MM-DD` text into `DD/MM/YYYY`.
///
/// The text is split on `-` without any validation. Missing segments render
/// empty and extra segments are dropped, so malformed input yields malformed
/// output instead of an error.
pub fn format_date_display(date: &str) -> String {
    let mut segments = date.split('-');
    let year = segments.next().unwrap_or_default();
    let month = segments.next().unwrap_or_default();
    let day = segments.next().unwrap_or_default();
    format!("{day}/{month}/{year}")
}

/// Parse `YYYY-MM-DD` as a calendar date.
pub fn parse_local_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Combine `YYYY-MM-DD` and `HH:MM` into a wall-clock date-time.
pub fn parse_local_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), DATE_TIME_FORMAT).ok()
}
