//! # Agendar Domain
//!
//! Business domain types and models for Agendar.
//!
//! This crate contains:
//! - Booking data types (BookingForm, BookingRequest, BookingSummary, etc.)
//! - The explicit UI state machine (`UiState`, `UiEvent`)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Pure input normalization (phone mask, date display, office time zone)
//!
//! ## Architecture
//! - No dependencies on other Agendar crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::date::{format_date_display, parse_local_date, parse_local_datetime};
pub use utils::phone::mask_phone;
pub use utils::timezone::OfficeTimeZone;
