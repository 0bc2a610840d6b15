//! Game state and the phase derived from it.
//!
//! `GameState` is a plain value: engine operations read one and return a
//! new one, so a turn never mutates state it did not produce.

use super::candidates::CandidateSet;
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Everything needed to resume a game on the next turn.
///
/// # Example
///
/// ```rust
/// use mindreader::core::{GameState, Phase};
///
/// let state = GameState::new(1, 100);
/// assert_eq!(state.candidates.len(), 100);
/// assert_eq!(state.phase(), Phase::NotStarted);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Numbers still consistent with every answer
    pub candidates: CandidateSet,
    /// Question awaiting an answer, if any
    pub pending: Option<Question>,
    /// Distinct questions asked so far
    pub question_count: u32,
}

impl GameState {
    /// Fresh state over `low..=high` with nothing asked yet.
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            candidates: CandidateSet::range(low, high),
            pending: None,
            question_count: 0,
        }
    }

    /// Current position in the question/answer protocol.
    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(question) => Phase::AwaitingAnswer(question),
            None if self.question_count == 0 => Phase::NotStarted,
            None => Phase::Finished,
        }
    }
}

/// Position of a game in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    NotStarted,
    AwaitingAnswer(Question),
    Finished,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::AwaitingAnswer(_) => "AwaitingAnswer",
            Self::Finished => "Finished",
        }
    }

    /// Whether no further answers are expected.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_started() {
        let state = GameState::new(1, 10);
        assert_eq!(state.phase(), Phase::NotStarted);
        assert!(!state.phase().is_final());
    }

    #[test]
    fn pending_question_means_awaiting_answer() {
        let state = GameState {
            candidates: CandidateSet::range(1, 10),
            pending: Some(Question::Prime),
            question_count: 1,
        };
        assert_eq!(state.phase(), Phase::AwaitingAnswer(Question::Prime));
    }

    #[test]
    fn cleared_question_after_asking_is_finished() {
        let state = GameState {
            candidates: CandidateSet::range(4, 4),
            pending: None,
            question_count: 5,
        };
        assert_eq!(state.phase(), Phase::Finished);
        assert!(state.phase().is_final());
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(Phase::NotStarted.name(), "NotStarted");
        assert_eq!(Phase::AwaitingAnswer(Question::Prime).name(), "AwaitingAnswer");
        assert_eq!(Phase::Finished.name(), "Finished");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = GameState {
            candidates: CandidateSet::range(1, 3),
            pending: Some(Question::GreaterThan(2)),
            question_count: 2,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
