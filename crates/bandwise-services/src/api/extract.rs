//! Request body validation.
//!
//! Bodies are read as raw bytes so that an absent body, malformed JSON, an
//! empty object, and a missing field each get their own 400 message before
//! any work is done.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

pub const NO_DATA: &str = "No data provided";
pub const INVALID_JSON: &str = "Invalid JSON body";

/// Parse `body` as a non-empty JSON object. Anything else that is valid
/// JSON counts as no data.
pub fn json_object(body: &Bytes) -> Result<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest(NO_DATA.into()));
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|_| ApiError::BadRequest(INVALID_JSON.into()))?;

    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        _ => Err(ApiError::BadRequest(NO_DATA.into())),
    }
}

/// Whether `field` is present with a non-null value.
pub fn has_field(map: &Map<String, Value>, field: &str) -> bool {
    map.get(field).is_some_and(|v| !v.is_null())
}

/// Fail with `Missing '<field>' field` unless `field` is present.
pub fn require_field(map: &Map<String, Value>, field: &str) -> Result<()> {
    if has_field(map, field) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!("Missing '{field}' field")))
    }
}

/// Deserialize a validated object into a typed request.
pub fn into_request<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))
}
