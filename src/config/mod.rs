//! Game configuration.
//!
//! The numeric range is configuration, not logic: the engine only ever
//! sees the bounds through a validated [`GameConfig`]. Validation uses
//! Stillwater's `Validation` so every problem is reported in one pass.

mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::ConfigError;

use serde::Deserialize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default smallest number
pub const DEFAULT_LOW: i64 = 1;

/// Default largest number
pub const DEFAULT_HIGH: i64 = 100;

/// Largest range a session may carry. The whole candidate list travels in
/// the session attributes, so this bounds the payload size.
pub const MAX_SPAN: i128 = 10_000;

/// Largest magnitude allowed for either bound. Keeps trial-division
/// primality checks over a whole range cheap.
pub const MAX_BOUND: i64 = 1_000_000;

/// Environment variable overriding the low bound
pub const LOW_ENV: &str = "MINDREADER_LOW";

/// Environment variable overriding the high bound
pub const HIGH_ENV: &str = "MINDREADER_HIGH";

/// Inclusive range the user picks a number from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub low: i64,
    pub high: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

impl GameConfig {
    /// Number of integers in the range (zero or negative when inverted).
    pub fn span(&self) -> i128 {
        i128::from(self.high) - i128::from(self.low) + 1
    }

    /// Check every constraint, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.low < self.high {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::EmptyRange {
                low: self.low,
                high: self.high,
            })
        });

        checks.push(if self.span() <= MAX_SPAN {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::RangeTooLarge {
                span: self.span(),
                max: MAX_SPAN,
            })
        });

        for bound in [self.low, self.high] {
            checks.push(if bound.unsigned_abs() <= MAX_BOUND.unsigned_abs() {
                Validation::success(())
            } else {
                Validation::fail(ConfigError::BoundTooLarge {
                    bound,
                    max: MAX_BOUND,
                })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Whether `n` lies inside the configured range.
    pub fn contains(&self, n: i64) -> bool {
        (self.low..=self.high).contains(&n)
    }

    /// Parse and validate a JSON document such as `{"low": 1, "high": 50}`.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        GameConfigBuilder::new()
            .low(parsed.low)
            .high(parsed.high)
            .build()
    }

    /// Read bounds from `MINDREADER_LOW` / `MINDREADER_HIGH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read bounds through `lookup`, defaulting whatever is absent.
    ///
    /// Both values are parsed before reporting, so a bad low and a bad
    /// high surface together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let low = parse_bound(&lookup, LOW_ENV, DEFAULT_LOW);
        let high = parse_bound(&lookup, HIGH_ENV, DEFAULT_HIGH);

        match (low, high) {
            (Ok(low), Ok(high)) => GameConfigBuilder::new().low(low).high(high).build(),
            (low, high) => Err(ConfigError::from_violations(
                [low.err(), high.err()].into_iter().flatten().collect(),
            )),
        }
    }
}

fn parse_bound<F>(lookup: &F, key: &str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
