//! # Agendar Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - The outbound booking gateway
//! - Conversions from I/O and parser errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `agendar-core`
//! - Depends on `agendar-domain` and `agendar-core`
//! - Contains all "impure" code (file system, environment, logging sinks)

pub mod config;
pub mod errors;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use integrations::*;
