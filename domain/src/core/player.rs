//! Player and roster value objects

use crate::core::error::SessionError;
use serde::{Deserialize, Serialize};

/// A participant in the estimation session (Value Object)
///
/// Identity is the display name itself: two players with the same name are
/// the same player. Names are trimmed and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player {
    name: String,
}

impl Player {
    /// Create a new player, trimming the name
    ///
    /// # Panics
    /// Panics if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        assert!(!name.is_empty(), "Player name cannot be empty");
        Self { name }
    }

    /// Try to create a new player, returning None if the name is blank
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() { None } else { Some(Self { name }) }
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Player {
    fn from(s: &str) -> Self {
        Player::new(s)
    }
}

/// The ordered set of players for one session
///
/// Order is turn order. A roster holds at least two players and no
/// duplicate names (the name is the ballot key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from player names, validating size and uniqueness
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, SessionError> {
        let mut players = Vec::new();
        for name in names {
            let player = Player::try_new(name).ok_or_else(|| {
                SessionError::InvalidSetup("player names cannot be blank".to_string())
            })?;
            if players.contains(&player) {
                return Err(SessionError::InvalidSetup(format!(
                    "duplicate player name: {player}"
                )));
            }
            players.push(player);
        }
        if players.len() < 2 {
            return Err(SessionError::InvalidSetup(format!(
                "at least 2 players are required, got {}",
                players.len()
            )));
        }
        Ok(Self { players })
    }

    /// Players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The player whose turn it is, given a turn index
    pub fn player_at(&self, turn_index: usize) -> Option<&Player> {
        self.players.get(turn_index)
    }

    /// Check membership by identity
    pub fn contains(&self, player: &Player) -> bool {
        self.players.contains(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_trims_name() {
        let player = Player::new("  alice ");
        assert_eq!(player.name(), "alice");
    }

    #[test]
    #[should_panic]
    fn test_blank_player_panics() {
        Player::new("   ");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Player::try_new("").is_none());
        assert!(Player::try_new("  ").is_none());
        assert!(Player::try_new("bob").is_some());
    }

    #[test]
    fn test_roster_ordering_is_turn_order() {
        let roster = Roster::new(["alice", "bob", "carol"]).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.player_at(0).unwrap().name(), "alice");
        assert_eq!(roster.player_at(2).unwrap().name(), "carol");
        assert!(roster.player_at(3).is_none());
    }

    #[test]
    fn test_roster_rejects_single_player() {
        let result = Roster::new(["alice"]);
        assert!(matches!(result, Err(SessionError::InvalidSetup(_))));
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let result = Roster::new(["alice", "bob", "alice"]);
        assert!(matches!(result, Err(SessionError::InvalidSetup(_))));
    }

    #[test]
    fn test_roster_rejects_blank_names() {
        let result = Roster::new(["alice", "  "]);
        assert!(matches!(result, Err(SessionError::InvalidSetup(_))));
    }

    #[test]
    fn test_roster_contains() {
        let roster = Roster::new(["alice", "bob"]).unwrap();
        assert!(roster.contains(&Player::new("alice")));
        assert!(!roster.contains(&Player::new("carol")));
    }
}
