//! Estimation round domain
//!
//! This module contains the voting primitives for a single round:
//!
//! - [`Vote`] — a card value or the BREAK sentinel
//! - [`Ballot`] — one vote per player for the current item
//! - [`ResolutionPolicy`] / [`RoundPhase`] — how completed ballots resolve
//! - [`resolve`] — the pure decision function turning a ballot into a
//!   [`RoundOutcome`]

pub mod ballot;
pub mod policy;
pub mod resolver;
pub mod vote;

// Re-export main types
pub use ballot::Ballot;
pub use policy::{ResolutionPolicy, RoundPhase};
pub use resolver::{Divergence, RoundOutcome, resolve};
pub use vote::{STANDARD_DECK, Vote};
