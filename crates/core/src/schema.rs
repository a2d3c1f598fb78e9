//! Request payload parsing.
//!
//! Create and update payloads arrive as untyped JSON. A client sees every
//! problem with its payload in one response:
//!
//! 1. the body must be a JSON object,
//! 2. (create only) every required key must be present and non-null,
//! 3. each key must decode into its DTO field,
//! 4. the DTO's `validator` field rules must hold.
//!
//! Failures from 2 to 4 are collected per payload key. A key that fails to
//! decode is swapped for a stand-in value so the remaining keys are still
//! decoded and checked; the stand-in never leaves this module because the
//! key's failure is already recorded.
//!
//! Unknown keys are ignored. Nothing here touches the database.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use serde_path_to_error::{Path, Segment};
use validator::{Validate, ValidationError};

use crate::error::{CoreError, FieldErrors};

/// Payload facts about a DTO that serde and validator do not expose.
pub trait PayloadFields {
    /// camelCase payload keys that must be present and not `null` on create.
    const REQUIRED: &'static [&'static str] = &[];

    /// `(struct field, payload key)` pairs for fields serde renames, so rule
    /// failures are reported under the key the client sent.
    const RENAMED: &'static [(&'static str, &'static str)] = &[];
}

/// Parse and validate a create payload.
pub fn parse_create<T>(payload: Value) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate + PayloadFields,
{
    let mut object = into_object(payload)?;

    let mut errors = FieldErrors::new();
    for key in T::REQUIRED {
        match object.get(*key) {
            None | Some(Value::Null) => {
                errors.add(*key, "is required");
                object.insert((*key).to_string(), Value::Null);
            }
            Some(_) => {}
        }
    }

    decode(object, errors)
}

/// Parse and validate a partial-update payload. Every field is optional.
pub fn parse_update<T>(payload: Value) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate + PayloadFields,
{
    decode(into_object(payload)?, FieldErrors::new())
}

/// Closed-set membership check used by the enum-like text fields.
pub fn one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("one_of");
    err.message = Some(Cow::Owned(format!(
        "invalid value '{value}'. Must be one of: {}",
        allowed.join(", ")
    )));
    Err(err)
}

fn into_object(payload: Value) -> Result<Map<String, Value>, CoreError> {
    match payload {
        Value::Object(object) => Ok(object),
        _ => Err(CoreError::Validation(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

fn decode<T>(mut object: Map<String, Value>, mut errors: FieldErrors) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate + PayloadFields,
{
    // Index into `stand_in` currently substituted for each failed key.
    let mut substituted: HashMap<String, usize> = HashMap::new();

    let parsed = loop {
        let err = match serde_path_to_error::deserialize::<_, T>(Value::Object(object.clone())) {
            Ok(parsed) => break Some(parsed),
            Err(err) => err,
        };

        let Some(key) = top_level_key(err.path()) else {
            if errors.is_empty() {
                return Err(CoreError::Validation(err.into_inner().to_string()));
            }
            break None;
        };

        let attempt = match substituted.get(&key) {
            Some(previous) => previous + 1,
            None => {
                if !errors.contains(&key) {
                    errors.add(key.clone(), describe(&err));
                }
                0
            }
        };
        match stand_in(attempt) {
            Some(value) => {
                substituted.insert(key.clone(), attempt);
                object.insert(key, value);
            }
            None => break None,
        }
    };

    if let Some(Err(raw)) = parsed.as_ref().map(Validate::validate) {
        let mut rules = FieldErrors::new();
        rules.merge_validator(&raw, T::RENAMED);
        errors.merge_unreported(rules);
    }
    errors.into_result()?;

    parsed.ok_or_else(|| CoreError::Validation("Request body could not be decoded".to_string()))
}

fn top_level_key(path: &Path) -> Option<String> {
    match path.iter().next()? {
        Segment::Map { key } => Some(key.clone()),
        _ => None,
    }
}

/// The serde message, prefixed with the nested location when the failure is
/// below the top-level key (`position.x: invalid type ...`).
fn describe(err: &serde_path_to_error::Error<serde_json::Error>) -> String {
    if err.path().iter().count() > 1 {
        format!("{}: {}", err.path(), err.inner())
    } else {
        err.inner().to_string()
    }
}

/// Values tried, in order, in place of a key that failed to decode.
fn stand_in(attempt: usize) -> Option<Value> {
    let value = match attempt {
        0 => Value::Null,
        1 => Value::String(String::new()),
        2 => Value::from(0),
        3 => Value::Bool(false),
        4 => Value::Array(Vec::new()),
        5 => Value::Object(Map::new()),
        _ => return None,
    };
    Some(value)
}
