//! Application layer for planning-poker
//!
//! This crate contains the session engine, port definitions, the discussion
//! timer and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod timer;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    backlog_source::{BacklogSource, BacklogSourceError},
    observer::{NoObserver, SessionObserver},
    pause_confirmation::{
        AutoAcceptPause, AutoDeclinePause, PauseConfirmation, PauseConfirmationError,
    },
    results_sink::{ResultsSink, ResultsSinkError},
    snapshot_store::{SnapshotStore, SnapshotStoreError},
};
pub use timer::{DiscussionTimer, TimerEvent};
pub use use_cases::run_session::{EngineError, SessionEngine, SessionEvent};
