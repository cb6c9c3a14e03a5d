//! Booking types
//!
//! A booking only lives for the duration of one submission. What survives is
//! its rendered [`AgendaEntry`] line in the session agenda.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::constants::INTEGRATION_ENDPOINT;
use crate::utils::date::format_date_display;

/// Raw field values as read from the booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub area: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub notes: String,
}

/// Normalized booking request built from a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub area: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl BookingRequest {
    /// Trim the free-text fields and take the selections verbatim.
    pub fn from_form(form: &BookingForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            area: form.area.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            notes: form.notes.trim().to_string(),
        }
    }

    /// Date rendered as `DD/MM/YYYY`
    pub fn date_display(&self) -> String {
        format_date_display(&self.date)
    }
}

/// Fields shown on the confirmation panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BookingSummary {
    pub name: String,
    pub area: String,
    pub date_display: String,
    pub time: String,
}

impl BookingSummary {
    pub fn from_booking(booking: &BookingRequest) -> Self {
        Self {
            name: booking.name.clone(),
            area: booking.area.clone(),
            date_display: booking.date_display(),
            time: booking.time.clone(),
        }
    }

    /// Labelled lines in display order
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Nome: {}", self.name),
            format!("Área de Interesse: {}", self.area),
            format!("Data: {}", self.date_display),
            format!("Horário: {}", self.time),
        ]
    }
}

/// Generated deep links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BookingLinks {
    pub whatsapp: String,
    pub calendar: String,
}

/// One line of the office agenda kept for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AgendaEntry {
    /// 1-based position in the session agenda
    pub sequence: u32,
    pub date_display: String,
    pub time: String,
    pub name: String,
    pub area: String,
}

impl AgendaEntry {
    pub fn from_summary(sequence: u32, summary: &BookingSummary) -> Self {
        Self {
            sequence,
            date_display: summary.date_display.clone(),
            time: summary.time.clone(),
            name: summary.name.clone(),
            area: summary.area.clone(),
        }
    }
}

impl fmt::Display for AgendaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} às {}h: {} (Área: {})", self.date_display, self.time, self.name, self.area)
    }
}

/// Everything produced by an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub booking: BookingRequest,
    pub summary: BookingSummary,
    pub links: BookingLinks,
}

/// Document a booking backend would receive
///
/// No backend exists; the integration gateway only records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationPayload {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub endpoint: String,
    pub booking: BookingRequest,
    pub links: BookingLinks,
}

impl IntegrationPayload {
    pub fn new(submitted_at: DateTime<Utc>, booking: BookingRequest, links: BookingLinks) -> Self {
        Self {
            id: Uuid::now_v7(),
            submitted_at,
            endpoint: INTEGRATION_ENDPOINT.to_string(),
            booking,
            links,
        }
    }
}
