//! Office time zone used to read booking dates and times.
//!
//! Dates and times on the form are wall-clock values. They are interpreted
//! in the office zone, which defaults to the host's local zone and can be
//! pinned to an IANA name through configuration.

use std::fmt;

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{AgendarError, Result};

/// Zone in which form dates and times are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OfficeTimeZone {
    /// Host's local zone
    #[default]
    Local,
    /// Fixed IANA zone
    Named(Tz),
}

impl OfficeTimeZone {
    /// Parse an optional IANA zone name; `None` or blank means [`Self::Local`].
    ///
    /// # Errors
    /// Returns `AgendarError::Config` when the name is not a known zone.
    pub fn parse(name: Option<&str>) -> Result<Self> {
        match name.map(str::trim).filter(|name| !name.is_empty()) {
            None => Ok(Self::Local),
            Some(name) => name
                .parse::<Tz>()
                .map(Self::Named)
                .map_err(|e| AgendarError::Config(format!("Unknown time zone '{name}': {e}"))),
        }
    }

    /// Calendar date of `now` in this zone
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => now.with_timezone(&Local).date_naive(),
            Self::Named(tz) => now.with_timezone(tz).date_naive(),
        }
    }

    /// Convert a wall-clock value in this zone to UTC.
    ///
    /// Ambiguous values (clocks turned back) take the earlier instant. Values
    /// inside a gap (clocks turned forward) are read with the offset in force
    /// before the transition.
    pub fn to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Local => resolve_local(&Local, local),
            Self::Named(tz) => resolve_local(tz, local),
        }
    }
}

impl fmt::Display for OfficeTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

fn resolve_local<Z: TimeZone>(zone: &Z, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before_gap = local - Duration::hours(1);
            zone.from_local_datetime(&before_gap)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc) + Duration::hours(1))
        }
    }
}
