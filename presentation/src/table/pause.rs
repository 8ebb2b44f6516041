//! Interactive pause confirmation for the table.
//!
//! When a completed round comes back with every card on BREAK, the engine
//! asks this port whether to pause. The user sees:
//!
//! ```text
//! Every player asked for a break.
//! Pausing saves a snapshot and keeps "<item>" open for later.
//!
//! pause? [y/N]
//! ```
//!
//! Anything other than yes declines the break and re-opens the round for
//! revisions.

use async_trait::async_trait;
use colored::Colorize;
use poker_application::{PauseConfirmation, PauseConfirmationError};
use poker_domain::BacklogItem;
use std::io::{self, Write};

/// Terminal prompt asking the table to confirm a requested pause.
///
/// # Example
///
/// ```ignore
/// use poker_presentation::InteractivePauseConfirmation;
/// use std::sync::Arc;
///
/// let engine = SessionEngine::new(
///     state,
///     params,
///     snapshot_store,
///     results_sink,
///     Arc::new(InteractivePauseConfirmation::new()),
/// );
/// ```
pub struct InteractivePauseConfirmation;

impl InteractivePauseConfirmation {
    pub fn new() -> Self {
        Self
    }

    /// Read one answer line
    fn read_answer(&self) -> Result<String, PauseConfirmationError> {
        print!("{} ", "pause? [y/N]".magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| PauseConfirmationError::IoError(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| PauseConfirmationError::IoError(format!("Failed to read input: {}", e)))?;

        Ok(input.trim().to_string())
    }
}

impl Default for InteractivePauseConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PauseConfirmation for InteractivePauseConfirmation {
    async fn confirm_pause(&self, item: &BacklogItem) -> Result<bool, PauseConfirmationError> {
        println!();
        println!("{}", "Every player asked for a break.".yellow().bold());
        println!(
            "Pausing saves a snapshot and keeps \"{}\" open for later.",
            item.feature
        );
        println!();

        loop {
            let input = self.read_answer()?;

            match input.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                // Empty input (including EOF) defaults to staying at the table
                "" | "n" | "no" => return Ok(false),
                _ => {
                    println!("Please answer y or n.");
                }
            }
        }
    }
}
