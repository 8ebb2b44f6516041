//! Resolution policies for estimation rounds
//!
//! This module defines how a completed ballot turns into an agreed value.

use serde::{Deserialize, Serialize};

/// How a round of votes is resolved into a single value
///
/// Selected once per session, before it starts, and immutable afterwards:
/// - `Unanimous`: every player must play the same card; divergence triggers
///   a discussion and a full re-vote.
/// - `Average`: two rounds are always played; the first opens a discussion,
///   the second is averaged.
///
/// # Example
///
/// ```
/// use poker_domain::estimate::ResolutionPolicy;
///
/// let policy: ResolutionPolicy = "unanimous".parse().unwrap();
/// assert_eq!(policy, ResolutionPolicy::Unanimous);
/// assert_eq!(ResolutionPolicy::default(), ResolutionPolicy::Average);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    /// All players must agree on the exact same value
    Unanimous,

    /// Discussion round, then a second round resolved by arithmetic mean
    #[default]
    Average,
}

impl ResolutionPolicy {
    /// Get the string identifier for this policy
    pub fn as_str(&self) -> &str {
        match self {
            ResolutionPolicy::Unanimous => "unanimous",
            ResolutionPolicy::Average => "average",
        }
    }

    /// Get a human-readable description of this policy
    pub fn description(&self) -> &str {
        match self {
            ResolutionPolicy::Unanimous => "unanimous (all players must play the same card)",
            ResolutionPolicy::Average => "average (discussion round, then averaged re-vote)",
        }
    }
}

impl std::fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unanimous" | "strict" => Ok(ResolutionPolicy::Unanimous),
            "average" | "mean" => Ok(ResolutionPolicy::Average),
            _ => Err(format!(
                "Unknown resolution policy: {}. Valid: unanimous, average",
                s
            )),
        }
    }
}

/// Sub-stage of a round under the `Average` policy
///
/// `First` is the discussion round: it never resolves a number, it only
/// surfaces divergence. `Second` is the confirming round whose numeric votes
/// are averaged. Under `Unanimous` the phase stays `First` for the whole
/// item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    #[default]
    First,
    Second,
}

impl RoundPhase {
    pub fn is_first(&self) -> bool {
        matches!(self, RoundPhase::First)
    }

    pub fn is_second(&self) -> bool {
        matches!(self, RoundPhase::Second)
    }

    /// Get the string identifier for this phase
    pub fn as_str(&self) -> &str {
        match self {
            RoundPhase::First => "first",
            RoundPhase::Second => "second",
        }
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
