//! Mock wall clock for deterministic testing
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "test-utils")]
//! # {
//! use agendar_common::testing::MockClock;
//! use agendar_common::time::Clock;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 7, 29, 9, 0, 0).unwrap();
//! let clock = MockClock::at(start);
//! clock.advance(Duration::hours(2));
//! assert_eq!(clock.now_utc(), start + Duration::hours(2));
//! # }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;

use crate::time::Clock;

/// Mock clock that only moves when told to
///
/// Clones share the same underlying instant, so a test can keep a handle
/// while the code under test owns another.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock pinned at `instant`
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(instant)) }
    }

    /// Create a mock clock pinned at noon UTC on `date`
    ///
    /// Noon keeps the calendar date stable for every offset between UTC-11
    /// and UTC+11.
    pub fn on_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::at(Utc.from_utc_datetime(&noon))
    }

    /// Advance the mock clock by a duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock();
        *current += duration;
    }

    /// Replace the current instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock() = instant;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::at(Utc::now())
    }
}

impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
