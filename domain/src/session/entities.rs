//! Session state machine
//!
//! [`SessionState`] is the aggregate root: it owns the roster, the backlog
//! cursor, the active ballot, the round phase and the accumulated results,
//! and it is the sole mutator of all of them. Every transition is a
//! synchronous reaction to one external event; invalid events are rejected
//! with a [`SessionError`] and leave the state untouched.

use crate::backlog::entities::{Backlog, BacklogItem, ResultEntry};
use crate::core::error::SessionError;
use crate::core::player::{Player, Roster};
use crate::estimate::ballot::Ballot;
use crate::estimate::policy::{ResolutionPolicy, RoundPhase};
use crate::estimate::resolver::{self, RoundOutcome};
use crate::estimate::vote::Vote;
use crate::session::snapshot::SessionSnapshot;

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Created but not started
    Setup,
    /// Waiting for the vote of the player at this turn index
    AwaitingVote(usize),
    /// Every player has voted; the round awaits resolution
    RoundComplete,
    /// A discussion window is open; no votes are accepted
    Discussing,
    /// The current item has an agreed note; the cursor may advance
    ItemResolved,
    /// Frozen into a snapshot, waiting to be resumed
    Paused,
    /// All backlog items are done
    SessionEnded,
}

impl SessionStatus {
    /// Get a human-readable name for this status
    pub fn display_name(&self) -> &str {
        match self {
            SessionStatus::Setup => "setup",
            SessionStatus::AwaitingVote(_) => "awaiting vote",
            SessionStatus::RoundComplete => "round complete",
            SessionStatus::Discussing => "discussing",
            SessionStatus::ItemResolved => "item resolved",
            SessionStatus::Paused => "paused",
            SessionStatus::SessionEnded => "session ended",
        }
    }

    pub fn is_awaiting_vote(&self) -> bool {
        matches!(self, SessionStatus::AwaitingVote(_))
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, SessionStatus::SessionEnded)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The estimation session aggregate
///
/// # Lifecycle
///
/// ```text
/// Setup ──start──> AwaitingVote(0) ──votes──> RoundComplete
///                        ^                         │ resolve_round
///                        │          ┌──────────────┼───────────────┐
///                        │      Resolved    NeedsDiscussion   BreakRequested
///                        │          │              │               │
///                        │     ItemResolved   Discussing      confirmation?
///                        │          │              │          yes → Paused
///                        └─advance──┴───elapsed────┘          no  → RoundComplete
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    roster: Roster,
    backlog: Backlog,
    policy: ResolutionPolicy,
    item_index: usize,
    phase: RoundPhase,
    ballot: Ballot,
    status: SessionStatus,
    results: Vec<ResultEntry>,
}

impl SessionState {
    /// Create a session in the `Setup` state
    ///
    /// Roster and backlog validity (≥2 players, ≥1 item) is enforced by
    /// their own constructors, so this cannot fail.
    pub fn new(roster: Roster, backlog: Backlog, policy: ResolutionPolicy) -> Self {
        Self {
            roster,
            backlog,
            policy,
            item_index: 0,
            phase: RoundPhase::First,
            ballot: Ballot::new(),
            status: SessionStatus::Setup,
            results: Vec::new(),
        }
    }

    /// Open the first voting round
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.status != SessionStatus::Setup {
            return Err(SessionError::InvalidSetup(format!(
                "session already started (status: {})",
                self.status
            )));
        }
        self.status = SessionStatus::AwaitingVote(0);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn ballot(&self) -> &Ballot {
        &self.ballot
    }

    pub fn backlog(&self) -> &Backlog {
        &self.backlog
    }

    /// Zero-based position of the item being estimated
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// The item being estimated, None once the session has ended
    pub fn current_item(&self) -> Option<&BacklogItem> {
        self.backlog.item_at(self.item_index)
    }

    /// The player whose turn it is, None outside `AwaitingVote`
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            SessionStatus::AwaitingVote(turn) => self.roster.player_at(turn),
            _ => None,
        }
    }

    /// Results accumulated so far, in backlog order
    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Record the current player's vote and pass the turn
    ///
    /// The voter is implicit: it is always the player whose turn it is.
    /// Outside `AwaitingVote` (during a discussion, after the round closed)
    /// the submission fails with `InvalidVote` and nothing changes.
    pub fn submit_vote(&mut self, vote: Vote) -> Result<(), SessionError> {
        let SessionStatus::AwaitingVote(turn) = self.status else {
            return Err(SessionError::InvalidVote(format!(
                "no vote expected right now (status: {})",
                self.status
            )));
        };
        let player = self
            .roster
            .player_at(turn)
            .ok_or_else(|| SessionError::InvalidVote(format!("no player at turn index {turn}")))?
            .clone();
        self.ballot.submit(&self.roster, &player, vote)?;
        self.status = if turn + 1 < self.roster.len() {
            SessionStatus::AwaitingVote(turn + 1)
        } else {
            SessionStatus::RoundComplete
        };
        Ok(())
    }

    /// Change an already-recorded vote after a declined pause
    ///
    /// Only meaningful in `RoundComplete`: the round stays closed, the vote
    /// is overwritten (last write wins), and the caller re-runs
    /// [`Self::resolve_round`] when the table is ready.
    pub fn revise_vote(&mut self, player: &Player, vote: Vote) -> Result<(), SessionError> {
        if self.status != SessionStatus::RoundComplete {
            return Err(SessionError::InvalidVote(format!(
                "votes can only be revised once the round is complete (status: {})",
                self.status
            )));
        }
        self.ballot.submit(&self.roster, player, vote)
    }

    /// Resolve the completed round and apply the outcome
    ///
    /// - `Resolved(v)` appends the result entry and moves to `ItemResolved`
    /// - `NeedsDiscussion` moves to `Discussing`
    /// - `BreakRequested` leaves the state in `RoundComplete`; pausing is
    ///   the caller's decision ([`Self::pause_confirmed`])
    pub fn resolve_round(&mut self) -> Result<RoundOutcome, SessionError> {
        if self.status != SessionStatus::RoundComplete {
            return Err(SessionError::InvalidVote(format!(
                "round is not complete (status: {})",
                self.status
            )));
        }
        let outcome = resolver::resolve(&self.ballot, &self.roster, self.policy, self.phase)?;
        match &outcome {
            RoundOutcome::Resolved(value) => {
                let feature = self.current_feature_or_default();
                self.results.push(ResultEntry::resolved(feature, *value));
                self.status = SessionStatus::ItemResolved;
            }
            RoundOutcome::NeedsDiscussion(_) => {
                self.status = SessionStatus::Discussing;
            }
            RoundOutcome::BreakRequested => {}
            // resolve() never yields AdvancePhase; that outcome comes from
            // discussion_elapsed().
            RoundOutcome::AdvancePhase => {}
        }
        Ok(outcome)
    }

    /// Close the discussion window and open the next voting round
    ///
    /// Clears the ballot and resets the turn. Under `Average` the first
    /// phase advances to the confirming second phase and
    /// `Some(AdvancePhase)` is returned; under `Unanimous` the same round
    /// is simply replayed and `None` is returned.
    pub fn discussion_elapsed(&mut self) -> Result<Option<RoundOutcome>, SessionError> {
        if self.status != SessionStatus::Discussing {
            return Err(SessionError::InvalidVote(format!(
                "no discussion in progress (status: {})",
                self.status
            )));
        }
        self.ballot.clear();
        self.status = SessionStatus::AwaitingVote(0);
        if self.policy == ResolutionPolicy::Average && self.phase.is_first() {
            self.phase = RoundPhase::Second;
            Ok(Some(RoundOutcome::AdvancePhase))
        } else {
            Ok(None)
        }
    }

    /// Move the cursor past a resolved item
    ///
    /// In `ItemResolved` this opens the next item's first round, or ends
    /// the session after the last item. At `SessionEnded` it fails with
    /// `NoMoreItems`. In any other state it is a no-op, so repeated
    /// advance requests never skip an item or duplicate a result.
    pub fn advance_item(&mut self) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::ItemResolved => {
                self.item_index += 1;
                self.ballot.clear();
                self.phase = RoundPhase::First;
                self.status = if self.item_index < self.backlog.len() {
                    SessionStatus::AwaitingVote(0)
                } else {
                    SessionStatus::SessionEnded
                };
                Ok(())
            }
            SessionStatus::SessionEnded => Err(SessionError::NoMoreItems),
            _ => Ok(()),
        }
    }

    /// Build the snapshot a confirmed pause would persist
    ///
    /// The BREAK marker for the current item is included in the snapshot's
    /// results, but the live session is not touched: the caller persists
    /// the snapshot first and commits with [`Self::pause_confirmed`] only
    /// once that succeeded, so a failed save leaves the round open. Only
    /// legal right after the resolver reported `BreakRequested`, i.e. in
    /// `RoundComplete` with every vote on BREAK.
    pub fn pause_snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.check_pausable()?;
        let mut snapshot = self.snapshot();
        snapshot
            .results
            .push(ResultEntry::break_marker(self.current_feature_or_default()));
        Ok(snapshot)
    }

    /// Record the confirmed pause and freeze the session
    ///
    /// Appends the BREAK marker for the current item and moves to `Paused`.
    /// Called after the snapshot from [`Self::pause_snapshot`] has been
    /// persisted.
    pub fn pause_confirmed(&mut self) -> Result<(), SessionError> {
        self.check_pausable()?;
        let feature = self.current_feature_or_default();
        self.results.push(ResultEntry::break_marker(feature));
        self.status = SessionStatus::Paused;
        Ok(())
    }

    fn check_pausable(&self) -> Result<(), SessionError> {
        if self.status != SessionStatus::RoundComplete || !self.ballot.all_break(&self.roster) {
            return Err(SessionError::InvalidVote(
                "pausing requires a completed round with every player on break".to_string(),
            ));
        }
        Ok(())
    }

    /// Capture the restorable copy of this session
    ///
    /// Timer and turn progress are deliberately absent: a restored session
    /// always resumes at the start of a fresh round for the current item.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self
                .roster
                .players()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
            ballot: self.ballot.clone(),
            backlog: self.backlog.items().to_vec(),
            backlog_index: self.item_index,
            policy: self.policy,
            current_feature: self.current_item().map(|item| item.feature.clone()),
            results: self.results.clone(),
        }
    }

    /// Rebuild a session from a snapshot
    ///
    /// Validation failures report `InvalidSnapshot` and nothing is
    /// restored. A trailing BREAK marker recorded for the resumed item is
    /// dropped so that the item still resolves exactly once. The restored
    /// session resumes at `AwaitingVote(0)`, phase `First`.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, SessionError> {
        let roster = Roster::new(snapshot.players.clone())
            .map_err(|e| SessionError::InvalidSnapshot(e.to_string()))?;
        let backlog = Backlog::new(snapshot.backlog.clone())
            .map_err(|e| SessionError::InvalidSnapshot(e.to_string()))?;
        if snapshot.backlog_index >= backlog.len() {
            return Err(SessionError::InvalidSnapshot(format!(
                "backlog index {} is out of range for {} items",
                snapshot.backlog_index,
                backlog.len()
            )));
        }
        for name in snapshot.ballot.voters() {
            if !roster.players().iter().any(|p| p.name() == name) {
                return Err(SessionError::InvalidSnapshot(format!(
                    "ballot entry for unknown player: {name}"
                )));
            }
        }

        let mut results = snapshot.results.clone();
        let current_feature = &backlog.items()[snapshot.backlog_index].feature;
        if results
            .last()
            .is_some_and(|entry| entry.is_break() && entry.task == *current_feature)
        {
            results.pop();
        }

        Ok(Self {
            roster,
            backlog,
            policy: snapshot.policy,
            item_index: snapshot.backlog_index,
            phase: RoundPhase::First,
            ballot: snapshot.ballot,
            status: SessionStatus::AwaitingVote(0),
            results,
        })
    }

    fn current_feature_or_default(&self) -> String {
        self.current_item()
            .map(|item| item.feature.clone())
            .unwrap_or_default()
    }
}
