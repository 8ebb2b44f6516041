//! JSON file snapshot store
//!
//! Persists the pause snapshot as a single pretty-printed JSON object so a
//! later process (or a curious human) can pick the session back up.

use async_trait::async_trait;
use poker_application::ports::snapshot_store::{SnapshotStore, SnapshotStoreError};
use poker_domain::SessionSnapshot;
use std::path::{Path, PathBuf};
use tracing::info;

/// Snapshot store reading and writing a JSON file on disk
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapshotStoreError::Io(e.to_string()))?;
        }
        let json = snapshot
            .to_json_pretty()
            .map_err(|e| SnapshotStoreError::Malformed(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| SnapshotStoreError::Io(e.to_string()))?;
        info!("Snapshot written to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<SessionSnapshot, SnapshotStoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    SnapshotStoreError::NotFound(self.path.display().to_string())
                }
                _ => SnapshotStoreError::Io(e.to_string()),
            })?;
        SessionSnapshot::from_json(&raw).map_err(|e| SnapshotStoreError::Malformed(e.to_string()))
    }
}
