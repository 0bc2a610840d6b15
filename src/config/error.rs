//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when building or loading a game configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The range holds fewer than two numbers
    #[error("Range is empty: low ({low}) must be less than high ({high})")]
    EmptyRange { low: i64, high: i64 },

    /// The range holds more numbers than a session can carry
    #[error("Range spans {span} numbers, maximum is {max}")]
    RangeTooLarge { span: i128, max: i128 },

    /// A bound is too far from zero to test primality quickly
    #[error("Bound {bound} is outside -{max}..={max}")]
    BoundTooLarge { bound: i64, max: i64 },

    /// A configuration value could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// A configuration document could not be parsed
    #[error("Configuration parse failed: {0}")]
    ParseFailed(String),

    /// More than one check failed
    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigError>),
}

impl ConfigError {
    /// Collapse accumulated violations into a single error.
    pub(crate) fn from_violations(mut violations: Vec<ConfigError>) -> Self {
        if violations.len() == 1 {
            violations.remove(0)
        } else {
            Self::Invalid(violations)
        }
    }
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
