//! Core game types and logic.
//!
//! This module contains the pure functional core of the game:
//! - The candidate set and its narrowing operations
//! - Questions and their evaluation against a number
//! - Game state and the phase derived from it
//!
//! Nothing here performs I/O or logging.

mod candidates;
mod question;
mod state;

pub use candidates::{CandidateSet, UnorderedCandidates};
pub use question::{is_prime, Question};
pub use state::{GameState, Phase};
