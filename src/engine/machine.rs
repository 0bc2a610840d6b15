//! The game engine: one pure transition per turn.

use crate::config::GameConfig;
use crate::core::{GameState, Question};
use crate::engine::intent::Intent;
use crate::engine::speech;
use crate::engine::transition::{self, AnswerError};
use tracing::{debug, info, warn};

/// What the engine says back to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// Full spoken response
    pub speech: String,
    /// Shorter prompt repeated if the user stays silent
    pub reprompt: String,
    /// Whether the conversation ends after this reply
    pub terminal: bool,
}

impl Reply {
    fn ask(intro: Option<&str>, question: &Question) -> Self {
        let text = question.text();
        let speech = match intro {
            Some(intro) => format!("{intro} {text}"),
            None => text.clone(),
        };
        Self {
            speech,
            reprompt: text,
            terminal: false,
        }
    }

    fn say(speech: String, terminal: bool) -> Self {
        Self {
            reprompt: speech.clone(),
            speech,
            terminal,
        }
    }
}

/// How a turn was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new question was asked
    Asked(Question),

    /// The pending question was asked again, with the reason if it was
    /// not a help request
    Repeated {
        question: Question,
        reason: Option<AnswerError>,
    },

    /// The number was deduced
    Solved { number: i64, questions: u32 },

    /// An answer arrived with no game in progress
    Rejected(AnswerError),

    /// The game was abandoned
    Ended,
}

/// Result of one engine operation: the next state plus what to say.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub state: GameState,
    pub reply: Reply,
    pub outcome: Outcome,
}

impl Turn {
    pub fn is_terminal(&self) -> bool {
        self.reply.terminal
    }
}

/// The number-guessing state machine.
///
/// The engine holds only configuration. Every operation takes the current
/// [`GameState`] by reference and returns the next one inside a [`Turn`],
/// so callers own persistence entirely.
///
/// # Example
///
/// ```rust
/// use mindreader::config::GameConfig;
/// use mindreader::core::Question;
/// use mindreader::engine::{GameEngine, Intent, Outcome};
///
/// let engine = GameEngine::new(GameConfig::default());
/// let turn = engine.start();
/// assert_eq!(turn.state.pending, Some(Question::Prime));
///
/// let turn = engine.answer(&turn.state, Intent::No);
/// assert!(matches!(turn.outcome, Outcome::Asked(Question::GreaterThan(_))));
/// assert_eq!(turn.state.question_count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Route a token to the matching operation.
    ///
    /// `Start`, `Help` and `Stop` are commands; every other token is
    /// treated as an answer.
    pub fn dispatch(&self, state: &GameState, intent: Intent) -> Turn {
        match intent {
            Intent::Start => self.start(),
            Intent::Help => self.help(state),
            Intent::Stop => self.end(state),
            _ => self.answer(state, intent),
        }
    }

    /// Begin a new game over the configured range and ask the first question.
    pub fn start(&self) -> Turn {
        let question = Question::Prime;
        let state = GameState {
            pending: Some(question),
            question_count: 1,
            ..GameState::new(self.config.low, self.config.high)
        };

        info!(
            low = self.config.low,
            high = self.config.high,
            "Started new game"
        );

        let intro = speech::welcome(&self.config);
        Turn {
            reply: Reply::ask(Some(intro.as_str()), &question),
            state,
            outcome: Outcome::Asked(question),
        }
    }

    /// Apply the user's answer to the pending question.
    pub fn answer(&self, state: &GameState, intent: Intent) -> Turn {
        let Some(question) = state.pending else {
            debug!(%intent, phase = state.phase().name(), "Answer with no game in progress");
            return self.reject(state, AnswerError::NoActiveGame { intent });
        };

        let elimination = match transition::resolve(question, intent) {
            Ok(elimination) => elimination,
            Err(error) => {
                debug!(%question, %intent, "Unrecognized answer");
                return self.repeat(state, question, Some(error));
            }
        };

        let remaining = elimination.apply(&state.candidates);

        if remaining.is_empty() {
            warn!(
                %question,
                %intent,
                candidates = state.candidates.len(),
                "Answer contradicts earlier answers"
            );
            return self.repeat(
                state,
                question,
                Some(AnswerError::Contradictory { question, intent }),
            );
        }

        if let Some(number) = remaining.sole_value() {
            let questions = state.question_count;
            info!(number, questions, "Determined number");
            return Turn {
                state: GameState {
                    candidates: remaining,
                    pending: None,
                    question_count: questions,
                },
                reply: Reply::say(speech::found(number, questions), true),
                outcome: Outcome::Solved { number, questions },
            };
        }

        let Some(next) = transition::next_question(question, &remaining) else {
            return self.repeat(
                state,
                question,
                Some(AnswerError::Contradictory { question, intent }),
            );
        };

        let question_count = state.question_count.saturating_add(1);
        debug!(
            previous = %question,
            next = %next,
            remaining = remaining.len(),
            count = question_count,
            "Asking next question"
        );

        Turn {
            state: GameState {
                candidates: remaining,
                pending: Some(next),
                question_count,
            },
            reply: Reply::ask(None, &next),
            outcome: Outcome::Asked(next),
        }
    }

    /// Explain and re-ask the pending question; starts a game if none is
    /// pending.
    pub fn help(&self, state: &GameState) -> Turn {
        match state.pending {
            Some(question) => self.repeat(state, question, None),
            None => self.start(),
        }
    }

    /// Abandon the game. Nothing further is said.
    pub fn end(&self, state: &GameState) -> Turn {
        debug!(phase = state.phase().name(), "Ending game");
        Turn {
            state: GameState {
                pending: None,
                ..state.clone()
            },
            reply: Reply::say(String::new(), true),
            outcome: Outcome::Ended,
        }
    }

    fn repeat(&self, state: &GameState, question: Question, reason: Option<AnswerError>) -> Turn {
        let intro = match &reason {
            Some(error) => error.to_string(),
            None => speech::help_for(&question).to_string(),
        };

        Turn {
            state: state.clone(),
            reply: Reply::ask(Some(intro.as_str()), &question),
            outcome: Outcome::Repeated { question, reason },
        }
    }

    fn reject(&self, state: &GameState, error: AnswerError) -> Turn {
        Turn {
            state: state.clone(),
            reply: Reply {
                speech: format!("{error} {}", speech::OFFER_START),
                reprompt: speech::OFFER_START.to_string(),
                terminal: false,
            },
            outcome: Outcome::Rejected(error),
        }
    }
}
