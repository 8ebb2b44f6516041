//! JSON file results sink
//!
//! Writes the final estimates as a pretty-printed JSON array, one object per
//! backlog item in estimation order.

use async_trait::async_trait;
use poker_application::ports::results_sink::{ResultsSink, ResultsSinkError};
use poker_domain::ResultEntry;
use std::path::{Path, PathBuf};
use tracing::info;

/// Results sink writing a JSON file to disk
pub struct JsonResultsSink {
    path: PathBuf,
}

impl JsonResultsSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultsSink for JsonResultsSink {
    async fn export(&self, results: &[ResultEntry]) -> Result<(), ResultsSinkError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ResultsSinkError::Io(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(results)
            .map_err(|e| ResultsSinkError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ResultsSinkError::Io(e.to_string()))?;
        info!(
            "Results for {} items written to {}",
            results.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_writes_estimates_and_break_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let sink = JsonResultsSink::new(&path);

        let results = vec![
            ResultEntry::resolved("login page", 5.0),
            ResultEntry::break_marker("search api"),
        ];
        sink.export(&results).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["task"], "login page");
        assert_eq!(value[0]["note"], 5.0);
        assert_eq!(value[1]["note"], "break");
    }

    #[tokio::test]
    async fn test_export_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let sink = JsonResultsSink::new(&path);

        sink.export(&[ResultEntry::resolved("one", 1.0)]).await.unwrap();
        sink.export(&[ResultEntry::resolved("two", 2.0)]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["task"], "two");
    }
}
