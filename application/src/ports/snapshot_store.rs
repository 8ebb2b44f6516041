//! Snapshot store port
//!
//! Defines the interface for persisting and reloading paused sessions.

use async_trait::async_trait;
use poker_domain::SessionSnapshot;
use thiserror::Error;

/// Errors that can occur while storing or loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotStoreError {
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Store for pause/resume snapshots
///
/// `save` runs when a pause is confirmed; `load` when a session is resumed,
/// possibly by a different process instance than the one that paused.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError>;

    /// Load the most recently saved snapshot
    async fn load(&self) -> Result<SessionSnapshot, SnapshotStoreError>;
}
