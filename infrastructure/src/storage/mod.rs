//! JSON file adapters for the session's storage ports
//!
//! - [`JsonBacklogSource`] — backlog input (array of work items)
//! - [`JsonSnapshotStore`] — pause/resume snapshot file
//! - [`JsonResultsSink`] — final results export

pub mod backlog;
pub mod results;
pub mod snapshot;

pub use backlog::JsonBacklogSource;
pub use results::JsonResultsSink;
pub use snapshot::JsonSnapshotStore;
