//! Field-presence validation for JSON request bodies.
//!
//! Checks are about key existence only: a key mapped to `null` counts as
//! present. A body that is not a JSON object has no keys at all.

use serde_json::Value;
use thiserror::Error;

/// Fields required to create a post, in the order they are checked.
pub const CREATE_FIELDS: &[&str] = &["title", "author", "content"];

/// Fields required to update a post, in the order they are checked.
pub const UPDATE_FIELDS: &[&str] = &["author", "title", "content", "id"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing `{0}` in request body")]
    MissingField(String),

    #[error("Field `{0}` must be a string")]
    NotAString(String),

    #[error("Request path id ({path}) and request body id ({body}) must match")]
    IdMismatch { path: String, body: String },
}

/// Ensure every key in `fields` is present in `body`.
///
/// Reports the first missing field in the order given.
pub fn require_fields(body: &Value, fields: &[&str]) -> Result<(), ValidationError> {
    let object = body.as_object();
    match fields
        .iter()
        .find(|field| !object.is_some_and(|o| o.contains_key(**field)))
    {
        Some(field) => Err(ValidationError::MissingField((*field).to_owned())),
        None => Ok(()),
    }
}

/// Extract a present field as an owned string.
pub fn string_field(body: &Value, field: &str) -> Result<String, ValidationError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::NotAString(field.to_owned())),
        None => Err(ValidationError::MissingField(field.to_owned())),
    }
}

/// Ensure the body's `id` is the same string as the id in the request path.
///
/// A non-string body id never matches; it is echoed back as JSON text.
pub fn require_matching_id(path_id: &str, body: &Value) -> Result<(), ValidationError> {
    match body.get("id") {
        Some(Value::String(s)) if s == path_id => Ok(()),
        Some(Value::String(s)) => Err(ValidationError::IdMismatch {
            path: path_id.to_owned(),
            body: s.clone(),
        }),
        Some(other) => Err(ValidationError::IdMismatch {
            path: path_id.to_owned(),
            body: other.to_string(),
        }),
        None => Err(ValidationError::MissingField("id".to_owned())),
    }
}
