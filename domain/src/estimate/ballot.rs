//! Per-round vote storage
//!
//! A ballot collects exactly one vote per roster member for the current
//! backlog item. It is cleared at the start of every round.

use crate::core::error::SessionError;
use crate::core::player::{Player, Roster};
use crate::estimate::vote::Vote;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Votes collected for the current round, keyed by player name
///
/// The ballot itself does not know the turn order; queries that need it
/// (completeness, min/max holders) take the roster explicitly.
///
/// # Example
///
/// ```
/// use poker_domain::core::player::{Player, Roster};
/// use poker_domain::estimate::{Ballot, Vote};
///
/// let roster = Roster::new(["alice", "bob"]).unwrap();
/// let mut ballot = Ballot::new();
/// ballot.submit(&roster, &Player::new("alice"), Vote::Estimate(5.0)).unwrap();
/// assert!(!ballot.is_complete(&roster));
/// ballot.submit(&roster, &Player::new("bob"), Vote::Estimate(8.0)).unwrap();
/// assert!(ballot.is_complete(&roster));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ballot {
    votes: HashMap<String, Vote>,
}

impl Ballot {
    /// Create an empty ballot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote, overwriting any earlier vote by the same player
    ///
    /// Fails with `InvalidVote` if the player is not on the roster or the
    /// value is not a finite non-negative number. A player may change their
    /// card any time before the round advances; the last write wins.
    pub fn submit(
        &mut self,
        roster: &Roster,
        player: &Player,
        vote: Vote,
    ) -> Result<(), SessionError> {
        if !roster.contains(player) {
            return Err(SessionError::InvalidVote(format!(
                "{player} is not part of this session"
            )));
        }
        // The variant can be built around the checked constructor, so the
        // value is validated again at the ballot boundary.
        let vote = match vote {
            Vote::Estimate(value) => Vote::estimate(value)?,
            Vote::Break => Vote::Break,
        };
        self.votes.insert(player.name().to_string(), vote);
        Ok(())
    }

    /// Forget all votes (new round)
    pub fn clear(&mut self) {
        self.votes.clear();
    }

    /// Number of votes recorded so far
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// The vote a player has recorded, if any
    pub fn vote_of(&self, player: &Player) -> Option<Vote> {
        self.votes.get(player.name()).copied()
    }

    /// Names of the players who have voted so far (no particular order)
    pub fn voters(&self) -> impl Iterator<Item = &str> {
        self.votes.keys().map(String::as_str)
    }

    /// True iff every roster member has voted
    pub fn is_complete(&self, roster: &Roster) -> bool {
        roster.players().iter().all(|p| self.votes.contains_key(p.name()))
    }

    /// True iff the round is complete and every vote is BREAK
    pub fn all_break(&self, roster: &Roster) -> bool {
        self.is_complete(roster) && self.votes.values().all(Vote::is_break)
    }

    /// True iff at least one recorded vote is BREAK
    pub fn has_breaks(&self) -> bool {
        self.votes.values().any(Vote::is_break)
    }

    /// The first player (roster order) holding the minimum numeric vote
    ///
    /// None if the ballot holds no numeric votes. Ties go to the earliest
    /// player in turn order.
    pub fn min_holder<'r>(&self, roster: &'r Roster) -> Option<(&'r Player, f64)> {
        let mut best: Option<(&Player, f64)> = None;
        for player in roster.players() {
            if let Some(value) = self.vote_of(player).and_then(|v| v.as_number()) {
                match best {
                    Some((_, current)) if value >= current => {}
                    _ => best = Some((player, value)),
                }
            }
        }
        best
    }

    /// The first player (roster order) holding the maximum numeric vote
    pub fn max_holder<'r>(&self, roster: &'r Roster) -> Option<(&'r Player, f64)> {
        let mut best: Option<(&Player, f64)> = None;
        for player in roster.players() {
            if let Some(value) = self.vote_of(player).and_then(|v| v.as_number()) {
                match best {
                    Some((_, current)) if value <= current => {}
                    _ => best = Some((player, value)),
                }
            }
        }
        best
    }

    /// Arithmetic mean of the numeric votes, rounded to 2 decimal places
    ///
    /// BREAK votes are excluded from the mean. Fails with `NoNumericVotes`
    /// if the ballot holds none.
    pub fn average(&self) -> Result<f64, SessionError> {
        let numbers: Vec<f64> = self.votes.values().filter_map(Vote::as_number).collect();
        if numbers.is_empty() {
            return Err(SessionError::NoNumericVotes);
        }
        let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
        Ok((mean * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["alice", "bob", "carol"]).unwrap()
    }

    fn vote(ballot: &mut Ballot, roster: &Roster, name: &str, value: f64) {
        ballot
            .submit(roster, &Player::new(name), Vote::Estimate(value))
            .unwrap();
    }

    #[test]
    fn test_submit_rejects_unknown_player() {
        let roster = roster();
        let mut ballot = Ballot::new();
        let result = ballot.submit(&roster, &Player::new("mallory"), Vote::Estimate(1.0));
        assert!(matches!(result, Err(SessionError::InvalidVote(_))));
        assert!(ballot.is_empty());
    }

    #[test]
    fn test_submit_rejects_non_finite_and_negative_values() {
        let roster = roster();
        let mut ballot = Ballot::new();
        for value in [f64::NAN, f64::INFINITY, -1.0] {
            let result = ballot.submit(&roster, &Player::new("alice"), Vote::Estimate(value));
            assert!(matches!(result, Err(SessionError::InvalidVote(_))), "{value}");
        }
        assert!(ballot.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let roster = roster();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "alice", 3.0);
        vote(&mut ballot, &roster, "alice", 8.0);
        assert_eq!(ballot.len(), 1);
        assert_eq!(ballot.vote_of(&Player::new("alice")), Some(Vote::Estimate(8.0)));
    }

    #[test]
    fn test_completeness() {
        let roster = roster();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "alice", 1.0);
        vote(&mut ballot, &roster, "bob", 2.0);
        assert!(!ballot.is_complete(&roster));
        vote(&mut ballot, &roster, "carol", 3.0);
        assert!(ballot.is_complete(&roster));
    }

    #[test]
    fn test_all_break_requires_completeness() {
        let roster = roster();
        let mut ballot = Ballot::new();
        ballot.submit(&roster, &Player::new("alice"), Vote::Break).unwrap();
        ballot.submit(&roster, &Player::new("bob"), Vote::Break).unwrap();
        assert!(!ballot.all_break(&roster));
        ballot.submit(&roster, &Player::new("carol"), Vote::Break).unwrap();
        assert!(ballot.all_break(&roster));
    }

    #[test]
    fn test_min_max_holders() {
        let roster = roster();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "alice", 5.0);
        vote(&mut ballot, &roster, "bob", 1.0);
        vote(&mut ballot, &roster, "carol", 13.0);

        let (min_player, min_value) = ballot.min_holder(&roster).unwrap();
        assert_eq!(min_player.name(), "bob");
        assert_eq!(min_value, 1.0);

        let (max_player, max_value) = ballot.max_holder(&roster).unwrap();
        assert_eq!(max_player.name(), "carol");
        assert_eq!(max_value, 13.0);
    }

    #[test]
    fn test_tie_break_is_first_in_roster_order() {
        let roster = roster();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "alice", 5.0);
        vote(&mut ballot, &roster, "bob", 5.0);
        vote(&mut ballot, &roster, "carol", 5.0);

        assert_eq!(ballot.min_holder(&roster).unwrap().0.name(), "alice");
        assert_eq!(ballot.max_holder(&roster).unwrap().0.name(), "alice");
    }

    #[test]
    fn test_holders_skip_break_votes() {
        let roster = roster();
        let mut ballot = Ballot::new();
        ballot.submit(&roster, &Player::new("alice"), Vote::Break).unwrap();
        vote(&mut ballot, &roster, "bob", 2.0);
        vote(&mut ballot, &roster, "carol", 8.0);

        assert_eq!(ballot.min_holder(&roster).unwrap().0.name(), "bob");
        assert_eq!(ballot.max_holder(&roster).unwrap().0.name(), "carol");
    }

    #[test]
    fn test_holders_undefined_without_numbers() {
        let roster = roster();
        let mut ballot = Ballot::new();
        ballot.submit(&roster, &Player::new("alice"), Vote::Break).unwrap();
        assert!(ballot.min_holder(&roster).is_none());
        assert!(ballot.max_holder(&roster).is_none());
    }

    #[test]
    fn test_average_two_decimals() {
        let roster = Roster::new(["a", "b", "c", "d"]).unwrap();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "a", 1.0);
        vote(&mut ballot, &roster, "b", 2.0);
        vote(&mut ballot, &roster, "c", 3.0);
        vote(&mut ballot, &roster, "d", 5.0);
        assert_eq!(ballot.average().unwrap(), 2.75);
    }

    #[test]
    fn test_average_exact() {
        let roster = Roster::new(["a", "b"]).unwrap();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "a", 2.0);
        vote(&mut ballot, &roster, "b", 2.0);
        assert_eq!(ballot.average().unwrap(), 2.00);
    }

    #[test]
    fn test_average_ignores_breaks() {
        let roster = roster();
        let mut ballot = Ballot::new();
        vote(&mut ballot, &roster, "alice", 3.0);
        vote(&mut ballot, &roster, "bob", 5.0);
        ballot.submit(&roster, &Player::new("carol"), Vote::Break).unwrap();
        assert_eq!(ballot.average().unwrap(), 4.0);
    }

    #[test]
    fn test_average_fails_without_numbers() {
        let ballot = Ballot::new();
        assert!(matches!(ballot.average(), Err(SessionError::NoNumericVotes)));
    }
}
