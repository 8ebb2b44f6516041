//! Domain layer for planning-poker
//!
//! This crate contains the core estimation logic, entities, and value
//! objects. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Round resolution
//!
//! A backlog is walked one item at a time. For each item every player
//! plays exactly one card per round; a completed round resolves under one
//! of two policies:
//!
//! - **Unanimous**: everyone must play the same card; divergence opens a
//!   timed discussion and a full re-vote
//! - **Average**: two rounds are always played; the first surfaces the
//!   extremes for discussion, the second is averaged
//!
//! ## Break and pause
//!
//! A round where every player plays BREAK asks the table whether to pause;
//! a confirmed pause freezes the session into a restorable
//! [`SessionSnapshot`].

pub mod backlog;
pub mod core;
pub mod estimate;
pub mod session;

// Re-export commonly used types
pub use backlog::entities::{Backlog, BacklogItem, ResultEntry};
pub use core::{
    error::SessionError,
    player::{Player, Roster},
};
pub use estimate::{
    ballot::Ballot,
    policy::{ResolutionPolicy, RoundPhase},
    resolver::{Divergence, RoundOutcome, resolve},
    vote::{STANDARD_DECK, Vote},
};
pub use session::{
    entities::{SessionState, SessionStatus},
    snapshot::SessionSnapshot,
};
