//! Mindreader: a number-guessing game for voice assistants
//!
//! The user silently picks a number in a configured range and the game
//! deduces it with yes/no and higher/lower/correct questions: one primality
//! question, then alternating threshold questions around the middle of the
//! surviving candidates.
//!
//! Mindreader follows a "pure core, imperative shell" layout. The core and
//! engine are pure functions over an explicit [`GameState`] value; the
//! session layer is the only code that touches the platform's request,
//! response and attribute formats.
//!
//! # Modules
//!
//! - **core**: Candidate sets, questions and game state
//! - **engine**: The question/answer state machine
//! - **config**: Validated range configuration
//! - **session**: Platform adapter (attribute codec, routing, envelopes)
//!
//! # Example
//!
//! ```rust
//! use mindreader::{GameConfig, GameEngine, Intent, Outcome};
//!
//! let engine = GameEngine::new(GameConfig { low: 1, high: 4 });
//!
//! let turn = engine.start(); // Is your number prime?
//! let turn = engine.answer(&turn.state, Intent::No); // 1 or 4 remain
//! let turn = engine.answer(&turn.state, Intent::Higher);
//!
//! assert_eq!(turn.outcome, Outcome::Solved { number: 4, questions: 2 });
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use config::{GameConfig, GameConfigBuilder};
pub use core::{CandidateSet, GameState, Phase, Question};
pub use engine::{GameEngine, Intent, Outcome, Reply, Turn};
pub use session::SessionAdapter;
