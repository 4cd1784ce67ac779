//! Response decoder module
//!
//! Maps the upstream envelope `{ "data": ..., "meta": {...} }` into typed
//! records.
//!
//! # Overview
//!
//! Unknown fields are ignored and missing optional fields become `None`.
//! Anything else that does not fit the expected shape (a non-object root, a
//! missing `data` field, a record without an integer `id`) is reported as
//! [`Error::Decode`], separate from transport failures.

use crate::error::{Error, Result};
use crate::pagination::Page;
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Single-record envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Parse a raw response body as JSON
pub fn parse_body(body: &str) -> Result<JsonValue> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("body is not valid JSON: {e}")))
}

/// Decode a list response into a page of records
pub fn decode_page<T: DeserializeOwned>(body: JsonValue) -> Result<Page<T>> {
    check_envelope(&body)?;
    if !body["data"].is_array() {
        return Err(Error::decode("expected `data` to be an array"));
    }
    serde_json::from_value(body).map_err(|e| Error::decode(e.to_string()))
}

/// Decode a single-record response
pub fn decode_single<T: DeserializeOwned>(body: JsonValue) -> Result<T> {
    check_envelope(&body)?;
    if !body["data"].is_object() {
        return Err(Error::decode("expected `data` to be an object"));
    }
    let envelope: Envelope<T> =
        serde_json::from_value(body).map_err(|e| Error::decode(e.to_string()))?;
    Ok(envelope.data)
}

fn check_envelope(body: &JsonValue) -> Result<()> {
    let Some(root) = body.as_object() else {
        return Err(Error::decode("expected a JSON object at the root"));
    };
    if !root.contains_key("data") {
        return Err(Error::decode("missing `data` field"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
