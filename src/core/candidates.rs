//! Ordered set of numbers still consistent with every answer so far.

use super::question::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected when a candidate list is not strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("candidate list is not strictly increasing at index {index}")]
pub struct UnorderedCandidates {
    pub index: usize,
}

/// Surviving candidates, strictly increasing.
///
/// Narrowing never mutates in place: `filter` and `only` return a new set,
/// leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use mindreader::core::{CandidateSet, Question};
///
/// let all = CandidateSet::range(1, 10);
/// let primes = all.filter(&Question::Prime, true);
///
/// assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
/// assert_eq!(all.len(), 10);
/// assert_eq!(primes.pivot(), Some(3));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct CandidateSet {
    values: Vec<i64>,
}

impl CandidateSet {
    /// Every integer in `low..=high`. Empty when `low > high`.
    pub fn range(low: i64, high: i64) -> Self {
        Self {
            values: (low..=high).collect(),
        }
    }

    /// Build from an already sorted list, rejecting duplicates or disorder.
    pub fn from_sorted(values: Vec<i64>) -> Result<Self, UnorderedCandidates> {
        if let Some(index) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(UnorderedCandidates { index: index + 1 });
        }
        Ok(Self { values })
    }

    /// Keep the numbers for which `question` evaluates to `keep`.
    ///
    /// The result may be empty; callers decide what an empty set means.
    pub fn filter(&self, question: &Question, keep: bool) -> Self {
        Self {
            values: self
                .values
                .iter()
                .copied()
                .filter(|&n| question.evaluate(n) == keep)
                .collect(),
        }
    }

    /// Keep only `value`, if it is still a candidate.
    pub fn only(&self, value: i64) -> Self {
        Self {
            values: self.values.iter().copied().filter(|&n| n == value).collect(),
        }
    }

    /// Lower-middle element by position: index `ceil(len / 2) - 1`.
    ///
    /// `None` for an empty set.
    pub fn pivot(&self) -> Option<i64> {
        let len = self.values.len();
        if len == 0 {
            return None;
        }
        self.values.get((len + 1) / 2 - 1).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.values.len() == 1
    }

    /// The remaining number once exactly one is left.
    pub fn sole_value(&self) -> Option<i64> {
        match self.values.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn contains(&self, n: i64) -> bool {
        self.values.binary_search(&n).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl TryFrom<Vec<i64>> for CandidateSet {
    type Error = UnorderedCandidates;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_sorted(values)
    }
}

impl From<CandidateSet> for Vec<i64> {
    fn from(set: CandidateSet) -> Self {
        set.values
    }
}
