//! Presentation layer for planning-poker
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive table REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod table;

// Re-export commonly used types
pub use cli::commands::{Cli, PolicyArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use table::{InteractivePauseConfirmation, TableRepl};
