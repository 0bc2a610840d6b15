//! Questions the engine can ask about the user's number.
//!
//! A question carries its own threshold, so evaluating it against a
//! candidate is a pure function of the question value and the number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A yes/no question about the hidden number.
///
/// # Example
///
/// ```rust
/// use mindreader::core::Question;
///
/// assert!(Question::Prime.evaluate(7));
/// assert!(Question::GreaterThan(10).evaluate(11));
/// assert!(!Question::LessThan(10).evaluate(10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Question {
    /// "Is your number prime?"
    Prime,
    /// "Is your number greater than t?"
    GreaterThan(i64),
    /// "Is your number less than t?"
    LessThan(i64),
}

impl Question {
    /// Truth value of this question for candidate `n`.
    pub fn evaluate(&self, n: i64) -> bool {
        match *self {
            Self::Prime => is_prime(n),
            Self::GreaterThan(t) => n > t,
            Self::LessThan(t) => n < t,
        }
    }

    /// The numeric threshold, if the question has one.
    pub fn threshold(&self) -> Option<i64> {
        match *self {
            Self::Prime => None,
            Self::GreaterThan(t) | Self::LessThan(t) => Some(t),
        }
    }

    /// Stable identifier used when persisting the question.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::GreaterThan(_) => "greater_than",
            Self::LessThan(_) => "less_than",
        }
    }

    /// Rebuild a question from its persisted kind and threshold.
    ///
    /// Returns `None` for an unknown kind, or when a threshold question
    /// is missing its threshold.
    pub fn from_parts(kind: &str, threshold: Option<i64>) -> Option<Self> {
        match (kind, threshold) {
            ("prime", _) => Some(Self::Prime),
            ("greater_than", Some(t)) => Some(Self::GreaterThan(t)),
            ("less_than", Some(t)) => Some(Self::LessThan(t)),
            _ => None,
        }
    }

    /// Spoken form of the question.
    pub fn text(&self) -> String {
        match self {
            Self::Prime => "Is your number prime?".to_string(),
            Self::GreaterThan(t) => format!("Is your number greater than {t}?"),
            Self::LessThan(t) => format!("Is your number less than {t}?"),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime => write!(f, "prime"),
            Self::GreaterThan(t) => write!(f, "greater_than({t})"),
            Self::LessThan(t) => write!(f, "less_than({t})"),
        }
    }
}

/// Primality by trial division up to `floor(sqrt(n))`.
///
/// Numbers below 2 are never prime. The loop bound is written as a
/// division so it cannot overflow near `i64::MAX`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut divisor = 2i64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
