//! Spoken text.

use crate::config::GameConfig;
use crate::core::Question;

pub const FOUND_NUMBER: &str = "I have determined that your number is";

pub const OFFER_START: &str = "Say start to play a new game.";

pub const PRIME_HELP: &str = "A number is prime if it is greater than 1 and does not divide \
evenly by any number besides 1 and itself. Answer this question with yes, or no.";

pub const GREATER_THAN_HELP: &str = "I am narrowing down your number. Answer yes or higher if \
your number is greater, no if it is not, or correct if I said your number.";

pub const LESS_THAN_HELP: &str = "I am narrowing down your number. Answer yes or lower if your \
number is less, no if it is not, or correct if I said your number.";

/// Introduction spoken before the first question.
pub fn welcome(config: &GameConfig) -> String {
    format!(
        "Think of a number between {} and {}, and I am going to figure it out. \
         Answer each question with yes, or no. When I name a number, you can also \
         say higher, lower, or correct. Let's begin...",
        config.low, config.high
    )
}

/// Explanation offered when the user asks for help on `question`.
pub fn help_for(question: &Question) -> &'static str {
    match question {
        Question::Prime => PRIME_HELP,
        Question::GreaterThan(_) => GREATER_THAN_HELP,
        Question::LessThan(_) => LESS_THAN_HELP,
    }
}

/// Announcement of the deduced number.
pub fn found(number: i64, questions: u32) -> String {
    let noun = if questions == 1 { "question" } else { "questions" };
    format!("{FOUND_NUMBER} {number}, it took me {questions} {noun} to figure it out.")
}
