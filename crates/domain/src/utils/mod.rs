//! Pure input normalization helpers

pub mod date;
pub mod phone;
pub mod timezone;
