//! Session snapshot record and codec
//!
//! A snapshot is the transport-neutral, restorable copy of a paused
//! session. It carries everything needed to rebuild the session in another
//! process; timer and turn progress are intentionally absent.

use crate::backlog::entities::{BacklogItem, ResultEntry};
use crate::core::error::SessionError;
use crate::estimate::ballot::Ballot;
use crate::estimate::policy::ResolutionPolicy;
use serde::{Deserialize, Serialize};

/// Flattened copy of a session, as written to the snapshot file
///
/// `current_feature` duplicates the current item's feature text for humans
/// inspecting the file; restore ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<String>,
    pub ballot: Ballot,
    pub backlog: Vec<BacklogItem>,
    pub backlog_index: usize,
    pub policy: ResolutionPolicy,
    #[serde(default)]
    pub current_feature: Option<String>,
    pub results: Vec<ResultEntry>,
}

impl SessionSnapshot {
    /// Encode as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, SessionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SessionError::InvalidSnapshot(e.to_string()))
    }

    /// Decode from JSON, rejecting malformed records
    pub fn from_json(s: &str) -> Result<Self, SessionError> {
        serde_json::from_str(s).map_err(|e| SessionError::InvalidSnapshot(e.to_string()))
    }
}
