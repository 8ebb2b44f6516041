//! Results sink port
//!
//! Defines the interface for exporting the final estimates.

use async_trait::async_trait;
use poker_domain::ResultEntry;
use thiserror::Error;

/// Errors that can occur while exporting results
#[derive(Error, Debug)]
pub enum ResultsSinkError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Sink receiving the final ordered results of a session
///
/// Invoked exactly once, when the session runs out of backlog items.
#[async_trait]
pub trait ResultsSink: Send + Sync {
    /// Export the results, in backlog order
    async fn export(&self, results: &[ResultEntry]) -> Result<(), ResultsSinkError>;
}
