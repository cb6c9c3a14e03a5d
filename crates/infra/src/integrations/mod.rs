//! External service integrations

pub mod gateway;

pub use gateway::{LoggingBookingGateway, INTEGRATION_LOG_TARGET};
