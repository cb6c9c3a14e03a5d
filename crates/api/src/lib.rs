//! # Agendar App
//!
//! Application layer - commands, console adapter and main entry point.
//!
//! This crate contains:
//! - Booking commands (view → core bridge)
//! - Application context (dependency injection)
//! - A console view for running the booking screen in a terminal
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides commands for any view adapter

pub mod adapters;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
