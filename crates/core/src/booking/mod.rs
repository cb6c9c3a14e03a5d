//! Booking form processing

pub mod flow;
pub mod ports;
pub mod service;
pub mod validation;

pub use flow::{BookingFlow, SubmissionOutcome};
pub use service::{BookingProcessor, ProcessorSettings};
