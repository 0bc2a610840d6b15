//! Platform request and response shapes.

use crate::engine::Reply;
use crate::session::attributes::Attributes;
use serde::{Deserialize, Serialize};

pub const RESPONSE_VERSION: &str = "1.0";

pub const CARD_TITLE: &str = "Mind Reader";

/// Incoming platform request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub session: SessionInfo,
    pub request: Request,
}

/// Session block of a request. Devices may omit `attributes` entirely.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest,
    IntentRequest { intent: IntentRef },
    SessionEndedRequest,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IntentRef {
    pub name: String,
}

/// Outgoing platform response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: Attributes,
    pub response: Response,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl ResponseEnvelope {
    /// Wrap an engine reply together with the attributes for the next turn.
    pub fn from_reply(reply: &Reply, session_attributes: Attributes) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response: Response {
                output_speech: OutputSpeech::plain(&reply.speech),
                card: Card {
                    kind: "Simple".to_string(),
                    title: CARD_TITLE.to_string(),
                    content: reply.speech.clone(),
                },
                reprompt: Reprompt {
                    output_speech: OutputSpeech::plain(&reply.reprompt),
                },
                should_end_session: reply.terminal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_intent_request() {
        let request: RequestEnvelope = serde_json::from_value(json!({
            "session": { "new": false, "attributes": { "num questions": 2 } },
            "request": {
                "type": "IntentRequest",
                "requestId": "abc",
                "intent": { "name": "Higher", "slots": {} }
            }
        }))
        .unwrap();

        assert!(!request.session.new);
        assert_eq!(request.session.attributes.len(), 1);
        assert_eq!(
            request.request,
            Request::IntentRequest {
                intent: IntentRef {
                    name: "Higher".to_string()
                }
            }
        );
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        let request: RequestEnvelope = serde_json::from_value(json!({
            "session": { "new": true },
            "request": { "type": "LaunchRequest" }
        }))
        .unwrap();

        assert!(request.session.new);
        assert!(request.session.attributes.is_empty());
        assert_eq!(request.request, Request::LaunchRequest);
    }

    #[test]
    fn unknown_request_type_is_tolerated() {
        let request: RequestEnvelope = serde_json::from_value(json!({
            "request": { "type": "Display.ElementSelected" }
        }))
        .unwrap();
        assert_eq!(request.request, Request::Unknown);
    }

    #[test]
    fn response_uses_platform_field_names() {
        let reply = Reply {
            speech: "Is your number prime?".to_string(),
            reprompt: "Is your number prime?".to_string(),
            terminal: false,
        };
        let envelope = ResponseEnvelope::from_reply(&reply, Attributes::new());

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Is your number prime?" },
                    "card": {
                        "type": "Simple",
                        "title": "Mind Reader",
                        "content": "Is your number prime?"
                    },
                    "reprompt": {
                        "outputSpeech": { "type": "PlainText", "text": "Is your number prime?" }
                    },
                    "shouldEndSession": false
                }
            })
        );
    }
}
