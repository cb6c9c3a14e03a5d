//! Wall-clock abstraction
//!
//! Business rules that depend on "now" (for example rejecting bookings dated
//! in the past) read the current instant through [`Clock`] so tests can pin
//! it with [`crate::testing::MockClock`].
//!
//! ```rust
//! use agendar_common::time::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let now = clock.now_utc();
//! assert!(now.timestamp() > 0);
//! ```

use chrono::{DateTime, Utc};

/// Trait for reading the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// Milliseconds since the UNIX epoch
    fn millis_since_epoch(&self) -> i64 {
        self.now_utc().timestamp_millis()
    }
}

/// Real system clock implementation
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
