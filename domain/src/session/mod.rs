//! Estimation session domain.
//!
//! - [`entities::SessionState`] — the orchestrating state machine
//! - [`entities::SessionStatus`] — where the session stands
//! - [`snapshot::SessionSnapshot`] — the restorable pause record

pub mod entities;
pub mod snapshot;

pub use entities::{SessionState, SessionStatus};
pub use snapshot::SessionSnapshot;
