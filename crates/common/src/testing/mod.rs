//! Testing utilities and helpers
//!
//! - **[`time`]**: controllable wall clock for deterministic date rules

pub mod time;

pub use time::MockClock;
