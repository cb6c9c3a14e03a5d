//! Deep links handed to the person booking.

pub mod calendar;
pub mod whatsapp;
