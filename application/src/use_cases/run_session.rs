//! Run Session use case
//!
//! [`SessionEngine`] drives a whole estimation session: it owns the
//! [`SessionState`], consumes the typed [`SessionEvent`]s emitted by the
//! presentation layer, runs the discussion countdown, asks for pause
//! confirmation on all-BREAK rounds and exports the results once the
//! backlog is exhausted.

use crate::config::SessionParams;
use crate::ports::observer::{NoObserver, SessionObserver};
use crate::ports::pause_confirmation::{PauseConfirmation, PauseConfirmationError};
use crate::ports::results_sink::{ResultsSink, ResultsSinkError};
use crate::ports::snapshot_store::{SnapshotStore, SnapshotStoreError};
use crate::timer::{DiscussionTimer, TimerEvent};
use poker_domain::{
    Backlog, Divergence, Player, ResolutionPolicy, Roster, RoundOutcome, SessionError,
    SessionState, SessionStatus, Vote,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Errors that can occur while driving a session
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotStoreError),

    #[error("Results export error: {0}")]
    Results(#[from] ResultsSinkError),

    #[error("Pause confirmation failed: {0}")]
    Confirmation(#[from] PauseConfirmationError),
}

/// Events sent from the presentation layer to the engine
pub enum SessionEvent {
    /// The player whose turn it is plays a card
    Vote(Vote),
    /// Change an already-recorded vote after a declined pause
    Revise { player: Player, vote: Vote },
    /// Move on: re-run the resolver after revisions, or step past a
    /// resolved item
    Advance,
    /// Throw everything away and start over with a fresh table
    NewSession {
        roster: Roster,
        backlog: Backlog,
        policy: ResolutionPolicy,
    },
    /// Replace the session with the one in the snapshot store
    Restore,
}

/// A live discussion window: the countdown handle plus the receiving end
/// of its event channel. Dropping it cancels the countdown, so a stale
/// tick can never reach a newer session.
struct ActiveDiscussion {
    _timer: DiscussionTimer,
    events: mpsc::UnboundedReceiver<TimerEvent>,
}

/// Use case for driving an estimation session end to end
pub struct SessionEngine {
    state: SessionState,
    params: SessionParams,
    discussion: Option<ActiveDiscussion>,
    snapshot_store: Arc<dyn SnapshotStore>,
    results_sink: Arc<dyn ResultsSink>,
    pause_confirmation: Arc<dyn PauseConfirmation>,
    observer: Arc<dyn SessionObserver>,
}

impl SessionEngine {
    /// Create an engine around an initial session state.
    ///
    /// The state may be freshly built (`Setup`) or restored from a
    /// snapshot; [`Self::start`] handles both.
    pub fn new(
        state: SessionState,
        params: SessionParams,
        snapshot_store: Arc<dyn SnapshotStore>,
        results_sink: Arc<dyn ResultsSink>,
        pause_confirmation: Arc<dyn PauseConfirmation>,
    ) -> Self {
        Self {
            state,
            params,
            discussion: None,
            snapshot_store,
            results_sink,
            pause_confirmation,
            observer: Arc::new(NoObserver),
        }
    }

    /// Set the observer receiving progress callbacks
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Open the session and announce the first round
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state.status() == SessionStatus::Setup {
            self.state.start()?;
        }
        info!(
            "Session opened with {} players and {} backlog items ({} policy)",
            self.state.roster().len(),
            self.state.backlog().len(),
            self.state.policy()
        );
        self.announce_round();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status()
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Whether a discussion countdown is currently running
    pub fn discussion_active(&self) -> bool {
        self.discussion.is_some()
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    /// Apply one external event to the session.
    ///
    /// Errors reject the event and leave the session unchanged; the caller
    /// decides whether to report them and carry on.
    pub async fn handle(&mut self, event: SessionEvent) -> Result<(), EngineError> {
        match event {
            SessionEvent::Vote(vote) => self.handle_vote(vote).await,
            SessionEvent::Revise { player, vote } => self.handle_revise(&player, vote),
            SessionEvent::Advance => self.handle_advance().await,
            SessionEvent::NewSession {
                roster,
                backlog,
                policy,
            } => self.handle_new_session(roster, backlog, policy),
            SessionEvent::Restore => self.handle_restore().await,
        }
    }

    /// Pump the active discussion window to completion.
    ///
    /// Forwards each countdown tick to the observer, applies the round
    /// transition when the window elapses and announces the next round.
    /// Returns immediately when no discussion is active.
    pub async fn run_discussion(&mut self) -> Result<(), EngineError> {
        let Some(mut discussion) = self.discussion.take() else {
            return Ok(());
        };
        while let Some(event) = discussion.events.recv().await {
            match event {
                TimerEvent::Tick(remaining) => self.observer.on_discussion_tick(remaining),
                TimerEvent::Elapsed => {
                    self.observer.on_discussion_end();
                    if self.state.discussion_elapsed()?.is_some() {
                        debug!("Advancing to the confirming vote round");
                    }
                    self.announce_round();
                    break;
                }
            }
        }
        Ok(())
    }

    async fn handle_vote(&mut self, vote: Vote) -> Result<(), EngineError> {
        let player = self.state.current_player().cloned();
        self.state.submit_vote(vote)?;
        // The submission was accepted, so a player was at the turn.
        if let Some(player) = player {
            debug!("{} played {}", player, vote);
            self.observer.on_vote_recorded(&player, &vote);
        }
        if self.state.status() == SessionStatus::RoundComplete {
            self.resolve_and_apply().await
        } else {
            self.announce_turn();
            Ok(())
        }
    }

    fn handle_revise(&mut self, player: &Player, vote: Vote) -> Result<(), EngineError> {
        self.state.revise_vote(player, vote)?;
        debug!("{} revised their vote to {}", player, vote);
        self.observer.on_vote_recorded(player, &vote);
        Ok(())
    }

    async fn handle_advance(&mut self) -> Result<(), EngineError> {
        match self.state.status() {
            // After a declined pause the round is still complete; an
            // advance request re-runs the resolver over the revised ballot.
            SessionStatus::RoundComplete => self.resolve_and_apply().await,
            _ => {
                let before = self.state.item_index();
                self.state.advance_item()?;
                if self.state.item_index() != before {
                    self.announce_round();
                }
                Ok(())
            }
        }
    }

    fn handle_new_session(
        &mut self,
        roster: Roster,
        backlog: Backlog,
        policy: ResolutionPolicy,
    ) -> Result<(), EngineError> {
        let mut state = SessionState::new(roster, backlog, policy);
        state.start()?;
        // Cancel any live countdown before the old session goes away.
        self.discussion = None;
        self.state = state;
        info!(
            "New session started with {} players and {} backlog items",
            self.state.roster().len(),
            self.state.backlog().len()
        );
        self.announce_round();
        Ok(())
    }

    async fn handle_restore(&mut self) -> Result<(), EngineError> {
        let snapshot = self.snapshot_store.load().await?;
        let state = SessionState::restore(snapshot)?;
        self.discussion = None;
        self.state = state;
        info!(
            "Session restored at backlog item {} of {}",
            self.state.item_index() + 1,
            self.state.backlog().len()
        );
        self.announce_round();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Outcome application
    // ------------------------------------------------------------------

    async fn resolve_and_apply(&mut self) -> Result<(), EngineError> {
        let outcome = self.state.resolve_round()?;
        match outcome {
            RoundOutcome::Resolved(value) => {
                if let Some(entry) = self.state.results().last() {
                    info!("\"{}\" estimated at {}", entry.task, value);
                    self.observer.on_item_resolved(entry);
                }
                self.state.advance_item()?;
                if self.state.status().is_ended() {
                    self.finish().await
                } else {
                    self.announce_round();
                    Ok(())
                }
            }
            RoundOutcome::NeedsDiscussion(divergence) => {
                info!(
                    "Votes diverge ({} at {}, {} at {}), opening a {}s discussion",
                    divergence.min_player,
                    divergence.min_vote,
                    divergence.max_player,
                    divergence.max_vote,
                    self.params.discussion_seconds
                );
                self.open_discussion(&divergence);
                Ok(())
            }
            RoundOutcome::BreakRequested => self.offer_pause().await,
            // resolve_round() never yields AdvancePhase; the phase moves in
            // run_discussion() when the window elapses.
            RoundOutcome::AdvancePhase => Ok(()),
        }
    }

    fn open_discussion(&mut self, divergence: &Divergence) {
        let seconds = self.params.discussion_seconds;
        self.observer.on_discussion_start(divergence, seconds);
        let (timer, events) = DiscussionTimer::start(seconds);
        self.discussion = Some(ActiveDiscussion {
            _timer: timer,
            events,
        });
    }

    async fn offer_pause(&mut self) -> Result<(), EngineError> {
        let item = self
            .state
            .current_item()
            .cloned()
            .ok_or(SessionError::NoMoreItems)?;
        if self.pause_confirmation.confirm_pause(&item).await? {
            // Persist before freezing: a failed save must leave the round
            // open instead of stranding an unrecoverable paused session.
            let snapshot = self.state.pause_snapshot()?;
            self.snapshot_store.save(&snapshot).await?;
            self.state.pause_confirmed()?;
            info!("Session paused on \"{}\", snapshot saved", item.feature);
            self.observer.on_paused();
        } else {
            debug!("Pause declined, round stays open for revisions");
            self.observer.on_pause_declined();
        }
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), EngineError> {
        info!(
            "All {} items estimated, exporting results",
            self.state.results().len()
        );
        if let Err(e) = self.results_sink.export(self.state.results()).await {
            warn!("Results export failed: {}", e);
            return Err(e.into());
        }
        self.observer.on_session_end(self.state.results());
        Ok(())
    }

    fn announce_round(&self) {
        if self.state.status().is_awaiting_vote()
            && let Some(item) = self.state.current_item()
        {
            self.observer.on_round_start(&item.feature, self.state.phase());
            self.announce_turn();
        }
    }

    fn announce_turn(&self) {
        if let Some(player) = self.state.current_player() {
            self.observer.on_turn(player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::pause_confirmation::{AutoAcceptPause, AutoDeclinePause};
    use async_trait::async_trait;
    use poker_domain::{BacklogItem, ResultEntry, RoundPhase, SessionSnapshot};
    use std::sync::Mutex;
    use std::time::Duration;

    struct MemorySnapshotStore {
        saved: Mutex<Option<SessionSnapshot>>,
    }

    impl MemorySnapshotStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SnapshotStore for MemorySnapshotStore {
        async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError> {
            *self.saved.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }

        async fn load(&self) -> Result<SessionSnapshot, SnapshotStoreError> {
            self.saved
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| SnapshotStoreError::NotFound("nothing saved".to_string()))
        }
    }

    struct FailingSnapshotStore;

    #[async_trait]
    impl SnapshotStore for FailingSnapshotStore {
        async fn save(&self, _snapshot: &SessionSnapshot) -> Result<(), SnapshotStoreError> {
            Err(SnapshotStoreError::Io("disk full".to_string()))
        }

        async fn load(&self) -> Result<SessionSnapshot, SnapshotStoreError> {
            Err(SnapshotStoreError::NotFound("nothing saved".to_string()))
        }
    }

    struct MemoryResultsSink {
        exported: Mutex<Vec<ResultEntry>>,
    }

    impl MemoryResultsSink {
        fn new() -> Self {
            Self {
                exported: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ResultsSink for MemoryResultsSink {
        async fn export(&self, results: &[ResultEntry]) -> Result<(), ResultsSinkError> {
            *self.exported.lock().unwrap() = results.to_vec();
            Ok(())
        }
    }

    fn roster() -> Roster {
        Roster::new(["alice", "bob"]).unwrap()
    }

    fn backlog() -> Backlog {
        Backlog::new(vec![
            BacklogItem::new("login page"),
            BacklogItem::new("search api"),
        ])
        .unwrap()
    }

    struct Harness {
        engine: SessionEngine,
        snapshots: Arc<MemorySnapshotStore>,
        results: Arc<MemoryResultsSink>,
    }

    fn engine_with(policy: ResolutionPolicy, confirmation: Arc<dyn PauseConfirmation>) -> Harness {
        let snapshots = Arc::new(MemorySnapshotStore::new());
        let results = Arc::new(MemoryResultsSink::new());
        let params = SessionParams::default()
            .with_policy(policy)
            .with_discussion_seconds(3);
        let state = SessionState::new(roster(), backlog(), policy);
        let engine = SessionEngine::new(
            state,
            params,
            snapshots.clone(),
            results.clone(),
            confirmation,
        );
        Harness {
            engine,
            snapshots,
            results,
        }
    }

    async fn vote(h: &mut Harness, value: f64) {
        h.engine
            .handle(SessionEvent::Vote(Vote::Estimate(value)))
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unanimous_table_estimates_the_whole_backlog() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();

        vote(&mut h, 5.0).await;
        vote(&mut h, 5.0).await;
        assert_eq!(h.engine.status(), SessionStatus::AwaitingVote(0));
        assert_eq!(h.engine.state().item_index(), 1);

        vote(&mut h, 8.0).await;
        vote(&mut h, 8.0).await;
        assert!(h.engine.status().is_ended());

        let exported = h.results.exported.lock().unwrap().clone();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0].note, Vote::Estimate(5.0));
        assert_eq!(exported[1].note, Vote::Estimate(8.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_divergent_round_discusses_then_revotes() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();

        vote(&mut h, 3.0).await;
        vote(&mut h, 13.0).await;
        assert_eq!(h.engine.status(), SessionStatus::Discussing);
        assert!(h.engine.discussion_active());

        // Votes are rejected while the table talks.
        let rejected = h.engine.handle(SessionEvent::Vote(Vote::Estimate(5.0))).await;
        assert!(matches!(
            rejected,
            Err(EngineError::Session(SessionError::InvalidVote(_)))
        ));

        h.engine.run_discussion().await.unwrap();
        assert_eq!(h.engine.status(), SessionStatus::AwaitingVote(0));
        assert!(h.engine.state().ballot().is_empty());
        assert_eq!(h.engine.state().phase(), RoundPhase::First);
    }

    #[tokio::test(start_paused = true)]
    async fn test_average_policy_confirming_round_produces_the_mean() {
        let mut h = engine_with(ResolutionPolicy::Average, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();

        // The first round always discusses, even on agreement.
        vote(&mut h, 5.0).await;
        vote(&mut h, 5.0).await;
        assert_eq!(h.engine.status(), SessionStatus::Discussing);

        h.engine.run_discussion().await.unwrap();
        assert_eq!(h.engine.state().phase(), RoundPhase::Second);

        vote(&mut h, 2.0).await;
        vote(&mut h, 3.0).await;
        assert_eq!(h.engine.state().item_index(), 1);
        assert_eq!(h.engine.state().results()[0].note, Vote::Estimate(2.5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_pause_keeps_the_round_open_for_revisions() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();

        h.engine.handle(SessionEvent::Vote(Vote::Break)).await.unwrap();
        h.engine.handle(SessionEvent::Vote(Vote::Break)).await.unwrap();
        assert_eq!(h.engine.status(), SessionStatus::RoundComplete);
        assert!(h.snapshots.saved.lock().unwrap().is_none());

        h.engine
            .handle(SessionEvent::Revise {
                player: Player::new("alice"),
                vote: Vote::Estimate(8.0),
            })
            .await
            .unwrap();
        h.engine
            .handle(SessionEvent::Revise {
                player: Player::new("bob"),
                vote: Vote::Estimate(8.0),
            })
            .await
            .unwrap();
        h.engine.handle(SessionEvent::Advance).await.unwrap();

        assert_eq!(h.engine.state().item_index(), 1);
        assert_eq!(h.engine.state().results()[0].note, Vote::Estimate(8.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmed_pause_snapshots_and_resumes_cleanly() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoAcceptPause));
        h.engine.start().unwrap();

        h.engine.handle(SessionEvent::Vote(Vote::Break)).await.unwrap();
        h.engine.handle(SessionEvent::Vote(Vote::Break)).await.unwrap();
        assert_eq!(h.engine.status(), SessionStatus::Paused);
        assert!(h.snapshots.saved.lock().unwrap().is_some());

        // A fresh engine resumes from the shared store.
        let mut resumed = SessionEngine::new(
            SessionState::new(roster(), backlog(), ResolutionPolicy::Unanimous),
            SessionParams::default(),
            h.snapshots.clone(),
            h.results.clone(),
            Arc::new(AutoDeclinePause),
        );
        resumed.handle(SessionEvent::Restore).await.unwrap();
        assert_eq!(resumed.status(), SessionStatus::AwaitingVote(0));
        assert_eq!(resumed.state().item_index(), 0);
        assert!(
            resumed.state().results().is_empty(),
            "break marker belongs to the resumed item"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_snapshot_save_leaves_the_round_open() {
        let state = SessionState::new(roster(), backlog(), ResolutionPolicy::Unanimous);
        let mut engine = SessionEngine::new(
            state,
            SessionParams::default(),
            Arc::new(FailingSnapshotStore),
            Arc::new(MemoryResultsSink::new()),
            Arc::new(AutoAcceptPause),
        );
        engine.start().unwrap();

        engine.handle(SessionEvent::Vote(Vote::Break)).await.unwrap();
        let result = engine.handle(SessionEvent::Vote(Vote::Break)).await;
        assert!(matches!(
            result,
            Err(EngineError::Snapshot(SnapshotStoreError::Io(_)))
        ));

        // Nothing reached disk, so nothing must have been committed: the
        // round stays complete and the table can still revise and resolve.
        assert_eq!(engine.status(), SessionStatus::RoundComplete);
        assert!(engine.state().results().is_empty());

        engine
            .handle(SessionEvent::Revise {
                player: Player::new("alice"),
                vote: Vote::Estimate(5.0),
            })
            .await
            .unwrap();
        engine
            .handle(SessionEvent::Revise {
                player: Player::new("bob"),
                vote: Vote::Estimate(5.0),
            })
            .await
            .unwrap();
        engine.handle(SessionEvent::Advance).await.unwrap();
        assert_eq!(engine.state().results()[0].note, Vote::Estimate(5.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_session_cancels_a_live_discussion() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();

        vote(&mut h, 1.0).await;
        vote(&mut h, 8.0).await;
        assert!(h.engine.discussion_active());

        h.engine
            .handle(SessionEvent::NewSession {
                roster: Roster::new(["dave", "erin"]).unwrap(),
                backlog: backlog(),
                policy: ResolutionPolicy::Unanimous,
            })
            .await
            .unwrap();
        assert!(!h.engine.discussion_active());
        assert_eq!(h.engine.status(), SessionStatus::AwaitingVote(0));

        // Run well past the discarded countdown's window; its elapse must
        // never touch the fresh session.
        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(h.engine.status(), SessionStatus::AwaitingVote(0));
        assert!(h.engine.state().ballot().is_empty());
        assert_eq!(h.engine.state().roster().players()[0].name(), "dave");
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_past_the_end_reports_no_more_items() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();

        for value in [5.0, 5.0, 8.0, 8.0] {
            vote(&mut h, value).await;
        }
        assert!(h.engine.status().is_ended());

        let result = h.engine.handle(SessionEvent::Advance).await;
        assert!(matches!(
            result,
            Err(EngineError::Session(SessionError::NoMoreItems))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_without_a_snapshot_fails_and_leaves_state() {
        let mut h = engine_with(ResolutionPolicy::Unanimous, Arc::new(AutoDeclinePause));
        h.engine.start().unwrap();
        vote(&mut h, 5.0).await;

        let result = h.engine.handle(SessionEvent::Restore).await;
        assert!(matches!(
            result,
            Err(EngineError::Snapshot(SnapshotStoreError::NotFound(_)))
        ));
        assert_eq!(h.engine.status(), SessionStatus::AwaitingVote(1));
        assert_eq!(h.engine.state().ballot().len(), 1);
    }

    #[derive(Default)]
    struct RecordingObserver {
        log: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        fn push(&self, entry: impl Into<String>) {
            self.log.lock().unwrap().push(entry.into());
        }
    }

    impl SessionObserver for RecordingObserver {
        fn on_round_start(&self, feature: &str, phase: RoundPhase) {
            self.push(format!("round:{}:{}", feature, phase.as_str()));
        }
        fn on_discussion_start(&self, _divergence: &Divergence, seconds: u64) {
            self.push(format!("discussion:{}", seconds));
        }
        fn on_discussion_end(&self) {
            self.push("discussion-end");
        }
        fn on_item_resolved(&self, entry: &ResultEntry) {
            self.push(format!("resolved:{}", entry.task));
        }
        fn on_paused(&self) {
            self.push("paused");
        }
        fn on_session_end(&self, results: &[ResultEntry]) {
            self.push(format!("end:{}", results.len()));
        }
        fn on_turn(&self, player: &Player) {
            self.push(format!("turn:{}", player));
        }
        fn on_vote_recorded(&self, player: &Player, _vote: &Vote) {
            self.push(format!("vote:{}", player));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_sees_the_round_lifecycle() {
        let observer = Arc::new(RecordingObserver::default());
        let state = SessionState::new(roster(), backlog(), ResolutionPolicy::Unanimous);
        let mut engine = SessionEngine::new(
            state,
            SessionParams::default().with_discussion_seconds(2),
            Arc::new(MemorySnapshotStore::new()),
            Arc::new(MemoryResultsSink::new()),
            Arc::new(AutoDeclinePause),
        )
        .with_observer(observer.clone());

        engine.start().unwrap();
        engine
            .handle(SessionEvent::Vote(Vote::Estimate(5.0)))
            .await
            .unwrap();
        engine
            .handle(SessionEvent::Vote(Vote::Estimate(5.0)))
            .await
            .unwrap();

        let log = observer.log.lock().unwrap();
        let log: Vec<&str> = log.iter().map(String::as_str).collect();
        assert_eq!(
            log,
            vec![
                "round:login page:first",
                "turn:alice",
                "vote:alice",
                "turn:bob",
                "vote:bob",
                "resolved:login page",
                "round:search api:first",
                "turn:alice",
            ]
        );
    }
}
