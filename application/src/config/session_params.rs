//! Session parameters — engine behavior control.
//!
//! [`SessionParams`] groups the static parameters that control a session in
//! [`SessionEngine`](crate::use_cases::run_session::SessionEngine). These are
//! application-layer concerns layered on top of the domain rules.

use poker_domain::ResolutionPolicy;
use serde::{Deserialize, Serialize};

/// Static parameters of one estimation session.
///
/// Assembled by the binary from config files and CLI flags, then handed to
/// the engine unchanged for the session's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionParams {
    /// How completed rounds resolve into an estimate.
    pub policy: ResolutionPolicy,
    /// Length of the discussion window after a divergent round, in seconds.
    pub discussion_seconds: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            policy: ResolutionPolicy::default(),
            discussion_seconds: 30,
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_discussion_seconds(mut self, seconds: u64) -> Self {
        self.discussion_seconds = seconds;
        self
    }
}
