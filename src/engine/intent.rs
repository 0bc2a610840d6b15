//! Pre-classified user intents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic label for what the user said.
///
/// Classification happens upstream; the engine only consumes these tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Intent {
    Yes,
    No,
    Higher,
    Lower,
    Correct,
    Help,
    Start,
    /// Cancel or stop
    Stop,
    Unrecognized,
}

impl Intent {
    /// Map a platform intent name to a token.
    ///
    /// Short names match case-insensitively; built-in platform names must
    /// match exactly. Anything else is `Unrecognized`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mindreader::engine::Intent;
    ///
    /// assert_eq!(Intent::from_name("AMAZON.HelpIntent"), Intent::Help);
    /// assert_eq!(Intent::from_name("higher"), Intent::Higher);
    /// assert_eq!(Intent::from_name("Maybe"), Intent::Unrecognized);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "AMAZON.YesIntent" => return Self::Yes,
            "AMAZON.NoIntent" => return Self::No,
            "AMAZON.HelpIntent" => return Self::Help,
            "AMAZON.CancelIntent" | "AMAZON.StopIntent" => return Self::Stop,
            _ => {}
        }

        match name.trim().to_ascii_lowercase().as_str() {
            "yes" => Self::Yes,
            "no" => Self::No,
            "higher" => Self::Higher,
            "lower" => Self::Lower,
            "correct" => Self::Correct,
            "help" => Self::Help,
            "start" => Self::Start,
            "stop" | "cancel" => Self::Stop,
            _ => Self::Unrecognized,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Higher => "Higher",
            Self::Lower => "Lower",
            Self::Correct => "Correct",
            Self::Help => "Help",
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::Unrecognized => "Unrecognized",
        };
        f.write_str(name)
    }
}
