//! Session observer port
//!
//! Defines the interface for reporting session progress to the outside.

use poker_domain::{Divergence, Player, ResultEntry, RoundPhase, Vote};

/// Callback for progress updates during an estimation session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait SessionObserver: Send + Sync {
    /// Called when a voting round opens on an item
    fn on_round_start(&self, feature: &str, phase: RoundPhase);

    /// Called when a completed round diverged and a discussion window opens
    fn on_discussion_start(&self, divergence: &Divergence, seconds: u64);

    /// Called when the discussion window closes
    fn on_discussion_end(&self);

    /// Called when an item resolves to an agreed estimate
    fn on_item_resolved(&self, entry: &ResultEntry);

    /// Called when a confirmed pause froze the session
    fn on_paused(&self);

    /// Called when the last item resolved and the results were exported
    fn on_session_end(&self, results: &[ResultEntry]);

    // ==================== Fine-grained Callbacks ====================

    /// Called when it becomes a player's turn to pick a card.
    fn on_turn(&self, _player: &Player) {}

    /// Called when a vote is recorded (submissions and revisions alike).
    fn on_vote_recorded(&self, _player: &Player, _vote: &Vote) {}

    /// Called once per second while a discussion window counts down.
    fn on_discussion_tick(&self, _seconds_remaining: u64) {}

    /// Called when an offered pause is declined and the round stays open.
    fn on_pause_declined(&self) {}
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl SessionObserver for NoObserver {
    fn on_round_start(&self, _feature: &str, _phase: RoundPhase) {}
    fn on_discussion_start(&self, _divergence: &Divergence, _seconds: u64) {}
    fn on_discussion_end(&self) {}
    fn on_item_resolved(&self, _entry: &ResultEntry) {}
    fn on_paused(&self) {}
    fn on_session_end(&self, _results: &[ResultEntry]) {}
}
