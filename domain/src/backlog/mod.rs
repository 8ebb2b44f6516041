//! Backlog domain.
//!
//! - [`entities::BacklogItem`] — a unit of work to be estimated
//! - [`entities::Backlog`] — the ordered, non-empty item list
//! - [`entities::ResultEntry`] — one exported {task, note} line

pub mod entities;

pub use entities::{Backlog, BacklogItem, ResultEntry};
