//! Answer resolution and question selection.
//!
//! This is the transition table of the game: which answers are valid for
//! which question, what each valid answer eliminates, and what to ask next.

use crate::core::{CandidateSet, Question};
use crate::engine::intent::Intent;
use thiserror::Error;

/// What a recognized answer eliminates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Elimination {
    /// Keep numbers where `question` evaluates to `keep`
    Keep { question: Question, keep: bool },
    /// Keep only this number
    Exactly(i64),
}

impl Elimination {
    /// Narrow `candidates` (pure; may return an empty set).
    pub fn apply(&self, candidates: &CandidateSet) -> CandidateSet {
        match *self {
            Self::Keep { question, keep } => candidates.filter(&question, keep),
            Self::Exactly(value) => candidates.only(value),
        }
    }
}

/// Reasons an answer cannot be applied.
///
/// Display strings are spoken to the user, so none of these is ever fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// The intent is not a valid answer to the pending question
    #[error("I was not expecting you to say that right now.")]
    Unrecognized { question: Question, intent: Intent },

    /// The answer would rule out every remaining number
    #[error("That doesn't match your earlier answers.")]
    Contradictory { question: Question, intent: Intent },

    /// An answer arrived with no question pending
    #[error("I was not expecting you to say that right now.")]
    NoActiveGame { intent: Intent },
}

/// Resolve an answer to the pending question (pure).
///
/// | question          | intent        | elimination        |
/// |-------------------|---------------|--------------------|
/// | `Prime`           | Yes           | keep primes        |
/// | `Prime`           | No            | drop primes        |
/// | `GreaterThan(t)`  | Higher or Yes | keep `n > t`       |
/// | `GreaterThan(t)`  | No            | drop `n > t`       |
/// | `LessThan(t)`     | Lower or Yes  | keep `n < t`       |
/// | `LessThan(t)`     | No            | drop `n < t`       |
/// | either threshold  | Correct       | keep only `t`      |
///
/// Everything else is [`AnswerError::Unrecognized`].
pub fn resolve(question: Question, intent: Intent) -> Result<Elimination, AnswerError> {
    let keeping = |keep| Ok(Elimination::Keep { question, keep });

    match (question, intent) {
        (Question::Prime, Intent::Yes) => keeping(true),
        (Question::Prime, Intent::No) => keeping(false),
        (Question::GreaterThan(_), Intent::Higher | Intent::Yes) => keeping(true),
        (Question::GreaterThan(_), Intent::No) => keeping(false),
        (Question::LessThan(_), Intent::Lower | Intent::Yes) => keeping(true),
        (Question::LessThan(_), Intent::No) => keeping(false),
        (Question::GreaterThan(t) | Question::LessThan(t), Intent::Correct) => {
            Ok(Elimination::Exactly(t))
        }
        _ => Err(AnswerError::Unrecognized { question, intent }),
    }
}

/// Choose the question that follows `previous`, given what remains.
///
/// Threshold questions alternate between greater-than and less-than, except
/// that a less-than question is skipped when two numbers remain: the pivot
/// is then the lower one, and nothing can be less than it.
///
/// Returns `None` only for an empty candidate set.
pub fn next_question(previous: Question, remaining: &CandidateSet) -> Option<Question> {
    let pivot = remaining.pivot()?;

    let next = match previous {
        Question::GreaterThan(_) if remaining.len() > 2 => Question::LessThan(pivot),
        Question::Prime | Question::GreaterThan(_) | Question::LessThan(_) => {
            Question::GreaterThan(pivot)
        }
    };
    Some(next)
}
