//! Booking commands - view adapters to core bridge

mod booking;

pub use booking::*;
