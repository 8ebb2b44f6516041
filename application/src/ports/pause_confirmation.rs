//! Pause confirmation port for all-BREAK rounds.
//!
//! This module defines the port (interface) for asking whether the session
//! should really pause when every player has played the BREAK card.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`PauseConfirmation`] - defined here in application layer
//! - **Adapter**: `InteractivePauseConfirmation` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! Every player votes BREAK
//!        ↓
//! Resolver outcome: BreakRequested
//!        ↓
//! PauseConfirmation::confirm_pause()
//!        ↓
//! yes → snapshot written, session frozen
//! no  → round stays complete, votes may be revised
//! ```
//!
//! # Built-in Implementations
//!
//! - [`AutoAcceptPause`] - Always answers yes
//! - [`AutoDeclinePause`] - Always answers no
//!
//! For interactive use, see `InteractivePauseConfirmation` in the
//! presentation layer.

use async_trait::async_trait;
use poker_domain::BacklogItem;

/// Error type for pause confirmation operations.
///
/// These errors represent failures while collecting the answer,
/// not the answer itself.
#[derive(Debug, Clone)]
pub enum PauseConfirmationError {
    /// User cancelled the prompt (e.g., via Ctrl+C).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
}

impl std::fmt::Display for PauseConfirmationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PauseConfirmationError::Cancelled => write!(f, "Operation cancelled"),
            PauseConfirmationError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PauseConfirmationError {}

/// Port for confirming a requested pause.
///
/// This trait defines the contract for pause confirmation handlers.
/// Implementations are responsible for:
/// 1. Telling the user that every player asked for a break
/// 2. Collecting a yes/no answer
/// 3. Returning it
#[async_trait]
pub trait PauseConfirmation: Send + Sync {
    /// Ask whether the session should pause on the given item.
    ///
    /// Called by the session engine only when a completed round came back
    /// with every vote on BREAK.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Pause: record the break, snapshot, freeze the session
    /// * `Ok(false)` - Keep the round open so players can revise their votes
    /// * `Err(PauseConfirmationError)` - Error while collecting the answer
    async fn confirm_pause(&self, item: &BacklogItem) -> Result<bool, PauseConfirmationError>;
}

/// Always pauses.
///
/// For non-interactive runs where an all-BREAK round should immediately
/// snapshot and stop.
pub struct AutoAcceptPause;

#[async_trait]
impl PauseConfirmation for AutoAcceptPause {
    async fn confirm_pause(&self, _item: &BacklogItem) -> Result<bool, PauseConfirmationError> {
        Ok(true)
    }
}

/// Never pauses.
///
/// The round stays complete and votes can be revised. Useful in tests and
/// when pausing makes no sense (e.g. piped input).
pub struct AutoDeclinePause;

#[async_trait]
impl PauseConfirmation for AutoDeclinePause {
    async fn confirm_pause(&self, _item: &BacklogItem) -> Result<bool, PauseConfirmationError> {
        Ok(false)
    }
}
