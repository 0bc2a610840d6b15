//! Builder API for game configuration.

use crate::config::error::ConfigError;
use crate::config::{GameConfig, DEFAULT_HIGH, DEFAULT_LOW};
use stillwater::validation::Validation;

/// Fluent builder for a validated [`GameConfig`].
///
/// # Example
///
/// ```rust
/// use mindreader::config::GameConfigBuilder;
///
/// let config = GameConfigBuilder::new().low(1).high(50).build().unwrap();
/// assert_eq!(config.span(), 50);
///
/// assert!(GameConfigBuilder::new().low(9).high(3).build().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    low: i64,
    high: i64,
}

impl GameConfigBuilder {
    /// Start from the default `1..=100` range.
    pub fn new() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }

    /// Set the smallest number the user may pick.
    pub fn low(mut self, low: i64) -> Self {
        self.low = low;
        self
    }

    /// Set the largest number the user may pick.
    pub fn high(mut self, high: i64) -> Self {
        self.high = high;
        self
    }

    /// Build the configuration, reporting every failed check at once.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            low: self.low,
            high: self.high,
        };

        match config.validate() {
            Validation::Success(_) => Ok(config),
            Validation::Failure(errors) => Err(ConfigError::from_violations(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
