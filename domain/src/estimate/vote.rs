//! Vote value object
//!
//! A vote is either a numeric estimate (a card value) or the BREAK sentinel
//! asking to pause the session.

use crate::core::error::SessionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{self, Visitor};

/// The conventional planning-poker deck, shown to players as a hint.
///
/// The engine itself accepts any finite non-negative value, not just these.
pub const STANDARD_DECK: [f64; 11] = [0.0, 0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 20.0, 40.0, 100.0];

/// A single card played by a player (Value Object)
///
/// # Example
///
/// ```
/// use poker_domain::estimate::Vote;
///
/// let card = Vote::estimate(5.0).unwrap();
/// assert_eq!(card.as_number(), Some(5.0));
///
/// let pause: Vote = "break".parse().unwrap();
/// assert!(pause.is_break());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vote {
    /// A numeric estimate (finite, non-negative)
    Estimate(f64),
    /// Request to pause the session
    Break,
}

impl Vote {
    /// Create a numeric vote, validating the value
    pub fn estimate(value: f64) -> Result<Self, SessionError> {
        if !value.is_finite() || value < 0.0 {
            return Err(SessionError::InvalidVote(format!(
                "estimate must be a finite non-negative number, got {value}"
            )));
        }
        Ok(Vote::Estimate(value))
    }

    /// Check if this vote is the BREAK sentinel
    pub fn is_break(&self) -> bool {
        matches!(self, Vote::Break)
    }

    /// Get the numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Vote::Estimate(value) => Some(*value),
            Vote::Break => None,
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vote::Estimate(value) => write!(f, "{value}"),
            Vote::Break => write!(f, "break"),
        }
    }
}

impl std::str::FromStr for Vote {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("break") {
            return Ok(Vote::Break);
        }
        let value: f64 = s.parse().map_err(|_| {
            SessionError::InvalidVote(format!("expected a card value or \"break\", got {s:?}"))
        })?;
        Vote::estimate(value)
    }
}

// Wire format: a bare JSON number, or the string "break".
impl Serialize for Vote {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Vote::Estimate(value) => serializer.serialize_f64(*value),
            Vote::Break => serializer.serialize_str("break"),
        }
    }
}

impl<'de> Deserialize<'de> for Vote {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VoteVisitor;

        impl Visitor<'_> for VoteVisitor {
            type Value = Vote;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a non-negative number or the string \"break\"")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Vote, E> {
                Vote::estimate(value).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Vote, E> {
                Vote::estimate(value as f64).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Vote, E> {
                Vote::estimate(value as f64).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Vote, E> {
                if value.eq_ignore_ascii_case("break") {
                    Ok(Vote::Break)
                } else {
                    Err(E::custom(format!("unknown vote token {value:?}")))
                }
            }
        }

        deserializer.deserialize_any(VoteVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_accepts_deck_values() {
        for value in STANDARD_DECK {
            assert!(Vote::estimate(value).is_ok());
        }
    }

    #[test]
    fn test_estimate_rejects_negative_and_non_finite() {
        assert!(Vote::estimate(-1.0).is_err());
        assert!(Vote::estimate(f64::NAN).is_err());
        assert!(Vote::estimate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_number_and_break() {
        assert_eq!("5".parse::<Vote>().unwrap(), Vote::Estimate(5.0));
        assert_eq!("0.5".parse::<Vote>().unwrap(), Vote::Estimate(0.5));
        assert_eq!("break".parse::<Vote>().unwrap(), Vote::Break);
        assert_eq!(" BREAK ".parse::<Vote>().unwrap(), Vote::Break);
        assert!("coffee".parse::<Vote>().is_err());
        assert!("-3".parse::<Vote>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vote::Estimate(8.0).to_string(), "8");
        assert_eq!(Vote::Estimate(0.5).to_string(), "0.5");
        assert_eq!(Vote::Break.to_string(), "break");
    }

    #[test]
    fn test_json_wire_format() {
        assert_eq!(serde_json::to_string(&Vote::Estimate(5.0)).unwrap(), "5.0");
        assert_eq!(serde_json::to_string(&Vote::Break).unwrap(), "\"break\"");

        let number: Vote = serde_json::from_str("13").unwrap();
        assert_eq!(number, Vote::Estimate(13.0));
        let sentinel: Vote = serde_json::from_str("\"break\"").unwrap();
        assert_eq!(sentinel, Vote::Break);
        assert!(serde_json::from_str::<Vote>("\"espresso\"").is_err());
        assert!(serde_json::from_str::<Vote>("-2").is_err());
    }
}
