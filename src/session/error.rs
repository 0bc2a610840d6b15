//! Session error types.

use crate::core::UnorderedCandidates;
use thiserror::Error;

/// Errors that can occur while reading session state or requests
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Some, but not all, game attributes are present
    #[error("Session attribute '{0}' is missing")]
    MissingField(&'static str),

    /// An attribute has the wrong type or an impossible value
    #[error("Session attribute '{key}' is invalid: {reason}")]
    InvalidField { key: &'static str, reason: String },

    /// The stored candidate list is out of order
    #[error("Stored candidates are invalid: {0}")]
    InvalidCandidates(#[from] UnorderedCandidates),

    /// The platform request could not be parsed
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}
