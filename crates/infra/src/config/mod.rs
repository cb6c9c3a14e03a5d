//! Where the office configuration comes from
//!
//! Environment first, then a config file, then built-in defaults.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
