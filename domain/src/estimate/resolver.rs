//! Round resolution
//!
//! Pure decision logic: given a completed ballot and the session's policy
//! and phase, decide what happens to the round. No state is mutated here;
//! the session state machine applies the outcome.

use crate::core::error::SessionError;
use crate::core::player::{Player, Roster};
use crate::estimate::ballot::Ballot;
use crate::estimate::policy::{ResolutionPolicy, RoundPhase};
use serde::{Deserialize, Serialize};

/// The two players holding the extreme estimates of a divergent round
///
/// On ties the earliest player in turn order is named. With a single
/// numeric vote (the rest on BREAK) both ends name the same player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    pub min_player: Player,
    pub min_vote: f64,
    pub max_player: Player,
    pub max_vote: f64,
}

/// Outcome of resolving a completed ballot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The round produced an agreed value for the current item
    Resolved(f64),
    /// Every player asked for a break; the caller should offer to pause
    BreakRequested,
    /// Votes diverge; a timed discussion must run before the next round
    NeedsDiscussion(Divergence),
    /// Average policy only: the discussion round is over, move to the
    /// confirming round. No number yet.
    AdvancePhase,
}

impl RoundOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, RoundOutcome::Resolved(_))
    }

    pub fn is_break_requested(&self) -> bool {
        matches!(self, RoundOutcome::BreakRequested)
    }

    pub fn is_needs_discussion(&self) -> bool {
        matches!(self, RoundOutcome::NeedsDiscussion(_))
    }
}

/// Resolve a completed ballot into an outcome
///
/// Decision rules:
/// - any policy: every vote BREAK → [`RoundOutcome::BreakRequested`]
/// - `Unanimous`: a single numeric value across all players →
///   [`RoundOutcome::Resolved`]; anything else (divergent values, or a
///   BREAK mixed into numeric votes) → [`RoundOutcome::NeedsDiscussion`]
/// - `Average`, phase `First`: always [`RoundOutcome::NeedsDiscussion`],
///   even when every card matches
/// - `Average`, phase `Second`: [`RoundOutcome::Resolved`] with the
///   2-decimal mean of the numeric votes
///
/// The caller guarantees the ballot is complete for the roster.
pub fn resolve(
    ballot: &Ballot,
    roster: &Roster,
    policy: ResolutionPolicy,
    phase: RoundPhase,
) -> Result<RoundOutcome, SessionError> {
    if ballot.all_break(roster) {
        return Ok(RoundOutcome::BreakRequested);
    }

    match (policy, phase) {
        (ResolutionPolicy::Unanimous, _) => {
            let (_, min_vote) = min_of(ballot, roster)?;
            let (_, max_vote) = max_of(ballot, roster)?;
            if !ballot.has_breaks() && min_vote == max_vote {
                Ok(RoundOutcome::Resolved(min_vote))
            } else {
                Ok(RoundOutcome::NeedsDiscussion(divergence(ballot, roster)?))
            }
        }
        (ResolutionPolicy::Average, RoundPhase::First) => {
            Ok(RoundOutcome::NeedsDiscussion(divergence(ballot, roster)?))
        }
        (ResolutionPolicy::Average, RoundPhase::Second) => {
            Ok(RoundOutcome::Resolved(ballot.average()?))
        }
    }
}

fn min_of<'r>(ballot: &Ballot, roster: &'r Roster) -> Result<(&'r Player, f64), SessionError> {
    ballot.min_holder(roster).ok_or(SessionError::NoNumericVotes)
}

fn max_of<'r>(ballot: &Ballot, roster: &'r Roster) -> Result<(&'r Player, f64), SessionError> {
    ballot.max_holder(roster).ok_or(SessionError::NoNumericVotes)
}

fn divergence(ballot: &Ballot, roster: &Roster) -> Result<Divergence, SessionError> {
    let (min_player, min_vote) = min_of(ballot, roster)?;
    let (max_player, max_vote) = max_of(ballot, roster)?;
    Ok(Divergence {
        min_player: min_player.clone(),
        min_vote,
        max_player: max_player.clone(),
        max_vote,
    })
}
