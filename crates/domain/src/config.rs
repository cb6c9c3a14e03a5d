//! Configuration structures
//!
//! Every field has a default so partial JSON/TOML files and partial
//! environment overrides stay valid.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AREAS, DEFAULT_EVENT_DURATION_MINUTES, DEFAULT_EVENT_TITLE_PREFIX, DEFAULT_LOG_LEVEL,
    DEFAULT_OFFICE_LOCATION, DEFAULT_WHATSAPP_NUMBER,
};
use crate::errors::Result;
use crate::impl_domain_enum_conversions;
use crate::utils::timezone::OfficeTimeZone;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub office: OfficeConfig,
    pub calendar: CalendarConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Resolve the configured office time zone
    ///
    /// # Errors
    /// Returns `AgendarError::Config` for an unknown IANA zone name.
    pub fn timezone(&self) -> Result<OfficeTimeZone> {
        OfficeTimeZone::parse(self.calendar.timezone.as_deref())
    }
}

/// Office contact details used in generated links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    /// WhatsApp number with country code, digits only
    pub whatsapp_number: String,
    /// Free-text location placed on calendar events
    pub location: String,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            location: DEFAULT_OFFICE_LOCATION.to_string(),
        }
    }
}

/// Calendar event settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub event_title_prefix: String,
    pub event_duration_minutes: u32,
    /// IANA zone name; `None` uses the host's local zone
    pub timezone: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            event_title_prefix: DEFAULT_EVENT_TITLE_PREFIX.to_string(),
            event_duration_minutes: DEFAULT_EVENT_DURATION_MINUTES,
            timezone: None,
        }
    }
}

/// Form behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Service categories offered in the area selector
    pub areas: Vec<String>,
    pub policy: FormPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            areas: DEFAULT_AREAS.iter().map(|area| (*area).to_string()).collect(),
            policy: FormPolicy::default(),
        }
    }
}

/// How much of the form is checked before a booking is accepted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPolicy {
    /// Only the past-date rule applies; everything else flows through.
    #[default]
    Permissive,
    /// Required fields, phone length, e-mail format, date/time shape and
    /// area membership are checked as well.
    Strict,
}

impl_domain_enum_conversions!(FormPolicy {
    Permissive => "permissive",
    Strict => "strict",
});

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
