//! Infrastructure layer for planning-poker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileReplConfig,
    FileSessionConfig,
};
pub use storage::{JsonBacklogSource, JsonResultsSink, JsonSnapshotStore};
