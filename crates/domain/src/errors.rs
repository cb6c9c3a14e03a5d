//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{GENERIC_FAILURE_MESSAGE, INVALID_FORM_MESSAGE, PAST_DATE_MESSAGE};

/// Main error type for Agendar
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AgendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Booking date is in the past: {0}")]
    PastDate(String),

    #[error("Integration error: {0}")]
    Integration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AgendarError {
    /// Text shown to the person filling the form when a submission is
    /// blocked.
    pub fn user_message(&self) -> String {
        match self {
            Self::PastDate(_) => PAST_DATE_MESSAGE.to_string(),
            Self::InvalidInput(detail) => format!("{INVALID_FORM_MESSAGE} ({detail})"),
            Self::Config(_) | Self::Integration(_) | Self::Internal(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Whether the error blocks the submission because of what was typed
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::PastDate(_) | Self::InvalidInput(_))
    }
}

/// Result type alias for Agendar operations
pub type Result<T> = std::result::Result<T, AgendarError>;
