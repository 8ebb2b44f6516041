//! JSON file backlog source
//!
//! Reads the backlog from a JSON array of objects, each carrying at least a
//! `feature` string. Unknown fields are ignored so exports from other tools
//! load as-is.

use async_trait::async_trait;
use poker_application::ports::backlog_source::{BacklogSource, BacklogSourceError};
use poker_domain::{Backlog, BacklogItem};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backlog source reading a JSON file from disk
pub struct JsonBacklogSource {
    path: PathBuf,
}

impl JsonBacklogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BacklogSource for JsonBacklogSource {
    async fn load(&self) -> Result<Backlog, BacklogSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    BacklogSourceError::NotFound(self.path.display().to_string())
                }
                _ => BacklogSourceError::Io(e.to_string()),
            })?;
        let items: Vec<BacklogItem> = serde_json::from_str(&raw).map_err(|e| {
            BacklogSourceError::Malformed(format!("{}: {}", self.path.display(), e))
        })?;
        debug!(
            "Loaded {} backlog items from {}",
            items.len(),
            self.path.display()
        );
        Ok(Backlog::new(items)?)
    }
}
