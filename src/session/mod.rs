//! Session adapter for voice-assistant platforms.
//!
//! Each platform request is handled in isolation: game state is decoded
//! from the request's session attributes, one engine operation runs, and
//! the next state is written back into the response. Nothing is kept
//! between calls.

pub mod attributes;
pub mod envelope;
pub mod error;

pub use attributes::Attributes;
pub use envelope::{Request, RequestEnvelope, ResponseEnvelope};
pub use error::SessionError;

use crate::core::GameState;
use crate::engine::{GameEngine, Intent, Turn};
use tracing::{debug, warn};

/// Routes platform requests to a [`GameEngine`].
///
/// # Example
///
/// ```rust
/// use mindreader::engine::GameEngine;
/// use mindreader::session::SessionAdapter;
///
/// let adapter = SessionAdapter::new(GameEngine::default());
/// let response = adapter
///     .handle_json(r#"{"session": {"new": true}, "request": {"type": "LaunchRequest"}}"#)
///     .unwrap();
///
/// assert!(!response.response.should_end_session);
/// assert!(response.response.output_speech.text.ends_with("Is your number prime?"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionAdapter {
    engine: GameEngine,
}

impl SessionAdapter {
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Parse a JSON request and handle it.
    pub fn handle_json(&self, json: &str) -> Result<ResponseEnvelope, SessionError> {
        let request: RequestEnvelope =
            serde_json::from_str(json).map_err(|e| SessionError::MalformedRequest(e.to_string()))?;
        Ok(self.handle(request))
    }

    /// Handle one turn. Never fails: unreadable state starts a new game.
    pub fn handle(&self, request: RequestEnvelope) -> ResponseEnvelope {
        let mut attrs = request.session.attributes;

        let restored = if request.session.new {
            None
        } else {
            match attributes::decode(&attrs, self.engine.config()) {
                Ok(state) => state,
                Err(error) => {
                    warn!(%error, "Discarding unreadable session state");
                    None
                }
            }
        };

        let turn = self.route(&request.request, restored);
        debug!(
            phase = turn.state.phase().name(),
            finished = turn.state.phase().is_final(),
            terminal = turn.is_terminal(),
            "Handled request"
        );

        attributes::encode(&turn.state, &mut attrs);
        ResponseEnvelope::from_reply(&turn.reply, attrs)
    }

    fn route(&self, request: &Request, restored: Option<GameState>) -> Turn {
        match (request, restored) {
            (Request::LaunchRequest, _) => self.engine.start(),
            (Request::SessionEndedRequest, state) => self.engine.end(&self.or_fresh(state)),
            (Request::IntentRequest { intent }, Some(state)) => {
                self.engine.dispatch(&state, Intent::from_name(&intent.name))
            }
            (Request::IntentRequest { intent }, None) => match Intent::from_name(&intent.name) {
                Intent::Stop => self.engine.end(&self.or_fresh(None)),
                _ => self.engine.start(),
            },
            (Request::Unknown, Some(state)) => self.engine.dispatch(&state, Intent::Unrecognized),
            (Request::Unknown, None) => self.engine.start(),
        }
    }

    fn or_fresh(&self, state: Option<GameState>) -> GameState {
        state.unwrap_or_else(|| {
            let config = self.engine.config();
            GameState::new(config.low, config.high)
        })
    }
}
