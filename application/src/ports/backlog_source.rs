//! Backlog source port
//!
//! Defines the interface for loading the ordered backlog a session estimates.

use async_trait::async_trait;
use poker_domain::{Backlog, SessionError};
use thiserror::Error;

/// Errors that can occur while loading a backlog
#[derive(Error, Debug)]
pub enum BacklogSourceError {
    #[error("Backlog not found: {0}")]
    NotFound(String),

    #[error("Malformed backlog: {0}")]
    Malformed(String),

    #[error("Unusable backlog: {0}")]
    Domain(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Source of the work items to estimate
///
/// This port defines how the application layer obtains the backlog.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait BacklogSource: Send + Sync {
    /// Load the backlog; fails if it cannot be read or holds no items
    async fn load(&self) -> Result<Backlog, BacklogSourceError>;
}
