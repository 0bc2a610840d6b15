//! Game state <-> session attribute codec.
//!
//! The platform hands back whatever map it was given on the previous turn.
//! Four keys carry the game; any other keys are left alone.

use crate::config::{GameConfig, MAX_SPAN};
use crate::core::{CandidateSet, GameState, Question};
use crate::session::error::SessionError;
use serde_json::{Map, Value};

/// Opaque key/value map owned by the platform.
pub type Attributes = Map<String, Value>;

pub const NUMBER_LIST_KEY: &str = "number list";
pub const LAST_QUESTION_KEY: &str = "last question";
pub const LAST_THRESHOLD_KEY: &str = "last threshold";
pub const NUM_QUESTIONS_KEY: &str = "num questions";

const GAME_KEYS: [&str; 4] = [
    NUMBER_LIST_KEY,
    LAST_QUESTION_KEY,
    LAST_THRESHOLD_KEY,
    NUM_QUESTIONS_KEY,
];

const NO_QUESTION: &str = "none";

/// Write `state` into `attributes`, replacing any previous game keys.
pub fn encode(state: &GameState, attributes: &mut Attributes) {
    let numbers: Vec<Value> = state.candidates.iter().map(Value::from).collect();
    attributes.insert(NUMBER_LIST_KEY.to_string(), Value::Array(numbers));

    let (kind, threshold) = match &state.pending {
        Some(question) => (question.kind(), question.threshold()),
        None => (NO_QUESTION, None),
    };
    attributes.insert(LAST_QUESTION_KEY.to_string(), Value::from(kind));
    attributes.insert(
        LAST_THRESHOLD_KEY.to_string(),
        threshold.map_or(Value::Null, Value::from),
    );
    attributes.insert(
        NUM_QUESTIONS_KEY.to_string(),
        Value::from(state.question_count),
    );
}

/// Read a game back out of `attributes`.
///
/// Returns `Ok(None)` when no game keys are present (a new session).
/// The stored list must fit inside `config`'s range, and a pending
/// threshold must be one of the stored candidates.
pub fn decode(
    attributes: &Attributes,
    config: &GameConfig,
) -> Result<Option<GameState>, SessionError> {
    if GAME_KEYS.iter().all(|key| !attributes.contains_key(*key)) {
        return Ok(None);
    }

    let candidates = decode_candidates(field(attributes, NUMBER_LIST_KEY)?)?;
    let pending = decode_question(
        field(attributes, LAST_QUESTION_KEY)?,
        field(attributes, LAST_THRESHOLD_KEY)?,
    )?;
    let question_count = decode_count(field(attributes, NUM_QUESTIONS_KEY)?)?;

    if pending.is_some() && candidates.len() < 2 {
        return Err(invalid(
            NUMBER_LIST_KEY,
            "a pending question needs at least two candidates",
        ));
    }
    check_range(&candidates, config)?;
    if let Some(threshold) = pending.as_ref().and_then(Question::threshold) {
        if !candidates.contains(threshold) {
            return Err(invalid(
                LAST_THRESHOLD_KEY,
                format!("{threshold} is not a remaining candidate"),
            ));
        }
    }

    Ok(Some(GameState {
        candidates,
        pending,
        question_count,
    }))
}

/// Remove every game key, leaving unrelated attributes in place.
pub fn clear(attributes: &mut Attributes) {
    for key in GAME_KEYS {
        attributes.remove(key);
    }
}

fn field<'a>(attributes: &'a Attributes, key: &'static str) -> Result<&'a Value, SessionError> {
    attributes.get(key).ok_or(SessionError::MissingField(key))
}

fn invalid(key: &'static str, reason: impl Into<String>) -> SessionError {
    SessionError::InvalidField {
        key,
        reason: reason.into(),
    }
}

fn decode_candidates(value: &Value) -> Result<CandidateSet, SessionError> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(NUMBER_LIST_KEY, "expected an array"))?;

    let numbers = items
        .iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| invalid(NUMBER_LIST_KEY, format!("{item} is not an integer")))
        })
        .collect::<Result<Vec<i64>, _>>()?;

    Ok(CandidateSet::from_sorted(numbers)?)
}

fn check_range(candidates: &CandidateSet, config: &GameConfig) -> Result<(), SessionError> {
    let limit = config.span().min(MAX_SPAN);
    if candidates.len() as i128 > limit {
        return Err(invalid(
            NUMBER_LIST_KEY,
            format!("{} candidates exceed the limit of {limit}", candidates.len()),
        ));
    }

    // Sorted, so the ends bound every value.
    let values = candidates.as_slice();
    for n in [values.first(), values.last()].into_iter().flatten() {
        if !config.contains(*n) {
            return Err(invalid(
                NUMBER_LIST_KEY,
                format!("{n} is outside {}..={}", config.low, config.high),
            ));
        }
    }
    Ok(())
}

fn decode_question(kind: &Value, threshold: &Value) -> Result<Option<Question>, SessionError> {
    let kind = kind
        .as_str()
        .ok_or_else(|| invalid(LAST_QUESTION_KEY, "expected a string"))?;

    if kind == NO_QUESTION {
        return Ok(None);
    }

    let threshold = match threshold {
        Value::Null => None,
        other => Some(
            other
                .as_i64()
                .ok_or_else(|| invalid(LAST_THRESHOLD_KEY, "expected an integer or null"))?,
        ),
    };

    Question::from_parts(kind, threshold)
        .map(Some)
        .ok_or_else(|| invalid(LAST_QUESTION_KEY, format!("unknown question '{kind}'")))
}

fn decode_count(value: &Value) -> Result<u32, SessionError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(NUM_QUESTIONS_KEY, "expected a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_attributes_mean_new_session() {
        assert_eq!(decode(&Attributes::new(), &GameConfig::default()), Ok(None));
    }

    #[test]
    fn encode_writes_four_keys() {
        let state = GameState {
            candidates: CandidateSet::range(4, 6),
            pending: Some(Question::LessThan(5)),
            question_count: 3,
        };
        let mut attrs = Attributes::new();
        encode(&state, &mut attrs);

        assert_eq!(
            Value::Object(attrs),
            json!({
                "number list": [4, 5, 6],
                "last question": "less_than",
                "last threshold": 5,
                "num questions": 3
            })
        );
    }

    #[test]
    fn decode_restores_encoded_state() {
        for pending in [None, Some(Question::Prime), Some(Question::GreaterThan(9))] {
            let state = GameState {
                candidates: CandidateSet::range(1, 20),
                pending,
                question_count: 4,
            };
            let mut attrs = Attributes::new();
            encode(&state, &mut attrs);
            assert_eq!(decode(&attrs, &GameConfig::default()), Ok(Some(state)));
        }
    }

    #[test]
    fn encode_preserves_unrelated_keys() {
        let mut attrs = attributes(json!({ "locale": "en-US" }));
        encode(&GameState::new(1, 3), &mut attrs);
        assert_eq!(attrs.get("locale"), Some(&json!("en-US")));

        clear(&mut attrs);
        assert_eq!(Value::Object(attrs), json!({ "locale": "en-US" }));
    }

    #[test]
    fn partial_state_is_missing_field() {
        let attrs = attributes(json!({ "number list": [1, 2, 3] }));
        assert_eq!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::MissingField(LAST_QUESTION_KEY))
        );
    }

    #[test]
    fn unordered_candidates_are_rejected() {
        let attrs = attributes(json!({
            "number list": [3, 1, 2],
            "last question": "prime",
            "last threshold": null,
            "num questions": 1
        }));
        assert!(matches!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::InvalidCandidates(_))
        ));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let attrs = attributes(json!({
            "number list": [1, 2, 3],
            "last question": "Is your number prime",
            "last threshold": null,
            "num questions": 1
        }));
        assert!(matches!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::InvalidField {
                key: LAST_QUESTION_KEY,
                ..
            })
        ));
    }

    #[test]
    fn threshold_question_without_threshold_is_rejected() {
        let attrs = attributes(json!({
            "number list": [1, 2, 3],
            "last question": "greater_than",
            "last threshold": null,
            "num questions": 2
        }));
        assert!(decode(&attrs, &GameConfig::default()).is_err());
    }

    #[test]
    fn negative_count_is_rejected() {
        let attrs = attributes(json!({
            "number list": [1, 2, 3],
            "last question": "prime",
            "last threshold": null,
            "num questions": -1
        }));
        assert!(matches!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::InvalidField {
                key: NUM_QUESTIONS_KEY,
                ..
            })
        ));
    }

    #[test]
    fn candidates_outside_range_are_rejected() {
        let attrs = attributes(json!({
            "number list": [500, 600, 700],
            "last question": "greater_than",
            "last threshold": 600,
            "num questions": 2
        }));
        assert!(matches!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::InvalidField {
                key: NUMBER_LIST_KEY,
                ..
            })
        ));
    }

    #[test]
    fn more_candidates_than_range_is_rejected() {
        let config = GameConfig { low: 1, high: 10 };
        let mut attrs = Attributes::new();
        encode(&GameState::new(1, 11), &mut attrs);
        assert!(matches!(
            decode(&attrs, &config),
            Err(SessionError::InvalidField {
                key: NUMBER_LIST_KEY,
                ..
            })
        ));
    }

    #[test]
    fn threshold_must_be_a_candidate() {
        let attrs = attributes(json!({
            "number list": [2, 4, 6],
            "last question": "less_than",
            "last threshold": 5,
            "num questions": 3
        }));
        assert!(matches!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::InvalidField {
                key: LAST_THRESHOLD_KEY,
                ..
            })
        ));
    }

    #[test]
    fn active_game_needs_two_candidates() {
        let attrs = attributes(json!({
            "number list": [7],
            "last question": "greater_than",
            "last threshold": 6,
            "num questions": 5
        }));
        assert!(matches!(
            decode(&attrs, &GameConfig::default()),
            Err(SessionError::InvalidField {
                key: NUMBER_LIST_KEY,
                ..
            })
        ));
    }
}
