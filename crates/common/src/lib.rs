//! Modular common utilities shared across Agendar crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validation framework and clock abstraction
//! - `test-utils`: deterministic test doubles (`MockClock`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod validation;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(any(feature = "test-utils", test))]
pub use testing::MockClock;
#[cfg(feature = "foundation")]
pub use time::{Clock, SystemClock};
#[cfg(feature = "foundation")]
pub use validation::{FieldError, FieldValidator, ValidationError, ValidationResult, Validator};
