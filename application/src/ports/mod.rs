//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod backlog_source;
pub mod observer;
pub mod pause_confirmation;
pub mod results_sink;
pub mod snapshot_store;
