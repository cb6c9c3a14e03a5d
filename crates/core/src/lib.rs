//! # Agendar Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The booking form processor (mask, validate, build, link)
//! - Deep-link builders for WhatsApp and Google Calendar
//! - The session state machine and the flow that drives a view
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `agendar-common` and `agendar-domain`
//! - No I/O, UI framework or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod booking;
pub mod links;
pub mod session;

pub use booking::flow::{BookingFlow, SubmissionOutcome};
pub use booking::ports::{BookingGateway, BookingView};
pub use booking::service::{BookingProcessor, ProcessorSettings};
pub use links::calendar::{build_calendar_link, CalendarEventSettings};
pub use links::whatsapp::build_whatsapp_link;
pub use session::BookingSession;
