//! Interactive table module
//!
//! Provides the readline-based prompt that drives an estimation session.

mod pause;
mod repl;

pub use pause::InteractivePauseConfirmation;
pub use repl::TableRepl;
