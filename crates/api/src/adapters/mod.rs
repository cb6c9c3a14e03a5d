//! View adapters that render the booking screen.

pub mod console;

pub use console::{run_console, ConsoleSummary, ConsoleView};
