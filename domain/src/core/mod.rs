//! Core domain concepts shared across all subdomains.
//!
//! - [`player::Player`] — a named participant; [`player::Roster`] — the
//!   ordered turn sequence
//! - [`error::SessionError`] — session-level errors, one variant per
//!   recoverable failure kind

pub mod error;
pub mod player;
