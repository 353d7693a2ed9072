//! Response envelope decoding
//!
//! Every hostel API response is a JSON object with a boolean `success` flag.
//! Successful responses carry their payload as sibling fields; failed ones
//! may carry an `errors` list whose first entry is shown to the user.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::utils::errors::{HostelMateError, Result};

/// Decode an envelope into its payload type.
///
/// `success: true` deserializes the whole object into `T`, so `T` picks the
/// fields it needs and ignores the flag. `success: false` becomes
/// [`HostelMateError::Api`]. Anything that is not an object with a boolean
/// flag is [`HostelMateError::MalformedResponse`].
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(HostelMateError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    match object.get("success") {
        Some(Value::Bool(true)) => serde_json::from_value(Value::Object(object))
            .map_err(|e| HostelMateError::MalformedResponse(e.to_string())),
        Some(Value::Bool(false)) => Err(HostelMateError::Api {
            message: first_error_message(&object),
        }),
        _ => Err(HostelMateError::MalformedResponse(
            "missing boolean `success` flag".to_string(),
        )),
    }
}

/// First server-provided error text, if any.
///
/// Accepts `errors: [{msg}]`, `errors: [{message}]`, `errors: ["text"]` and
/// a bare `errors: "text"`.
pub fn first_error_message(object: &Map<String, Value>) -> Option<String> {
    match object.get("errors")? {
        Value::String(text) => non_empty(text),
        Value::Array(entries) => match entries.first()? {
            Value::String(text) => non_empty(text),
            Value::Object(entry) => entry
                .get("msg")
                .or_else(|| entry.get("message"))
                .and_then(Value::as_str)
                .and_then(non_empty),
            _ => None,
        },
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
