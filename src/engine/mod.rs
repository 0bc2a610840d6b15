//! The game engine.
//!
//! Holds the question/answer protocol on top of the pure core:
//! - **Intents**: pre-classified tokens for what the user said
//! - **Transitions**: which answers are valid and what they eliminate
//! - **Engine**: start, answer, help and end, each returning the next state
//!
//! Unexpected input never fails a turn. It is resolved to a spoken reply
//! that re-asks the pending question or offers a new game.

mod intent;
mod machine;
pub mod speech;
mod transition;

pub use intent::Intent;
pub use machine::{GameEngine, Outcome, Reply, Turn};
pub use transition::{next_question, resolve, AnswerError, Elimination};
