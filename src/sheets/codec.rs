// src/sheets/codec.rs
//! Stateless JSON conversions shared by the parser, the fetch client and the
//! write path.
//!
//! Nothing here holds configuration: every function takes its input and
//! returns an owned result, so components call into it directly instead of
//! sharing a configured mapper.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::{UpdateError, UpdateResult, UNPARSABLE_BODY_MESSAGE};

/// Parse caller supplied payload text into a JSON tree.
///
/// Blank text counts as an empty payload rather than a parse failure.
pub fn parse_payload(text: &str) -> UpdateResult<Value> {
    if text.trim().is_empty() {
        return Err(UpdateError::EmptyPayload);
    }
    serde_json::from_str(text).map_err(|_| UpdateError::Parse(UNPARSABLE_BODY_MESSAGE.to_string()))
}

/// Decode a response body from the store.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> UpdateResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        UpdateError::Parse(format!(
            "Unable to parse response body '{}': {}",
            String::from_utf8_lossy(body),
            e
        ))
    })
}

/// Text form of a scalar cell value. Returns `None` for objects and arrays.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Convert one row element into an ordered, flat column -> text mapping.
///
/// `position` is only used for error messages.
pub fn to_flat_map(value: &Value, position: usize) -> UpdateResult<Vec<(String, String)>> {
    let object = value.as_object().ok_or_else(|| {
        UpdateError::Parse(format!(
            "Row at position {} is not an object of column values",
            position
        ))
    })?;
    flatten_object(object, position)
}

fn flatten_object(object: &Map<String, Value>, position: usize) -> UpdateResult<Vec<(String, String)>> {
    object
        .iter()
        .map(|(column, value)| {
            scalar_to_string(value)
                .map(|text| (column.clone(), text))
                .ok_or_else(|| {
                    UpdateError::Parse(format!(
                        "Column '{}' of row at position {} is not a plain value",
                        column, position
                    ))
                })
        })
        .collect()
}
