//! POST payload shapes.
//!
//! # Design
//! `Payload` enumerates the three bodies `HttpClient::post` accepts: raw
//! bytes sent unchanged, a string-keyed JSON map, and a structured value.
//! Anything else (a JSON array, scalar or null where an object is expected)
//! is refused with `ClientError::PayloadType` before a request is built.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Body accepted by `HttpClient::post`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Bytes sent as-is.
    Raw(Vec<u8>),
    /// Generic string-keyed mapping, serialized to JSON.
    Map(Map<String, Value>),
    /// A structured value, serialized to JSON. Must be a JSON object.
    Struct(Value),
}

impl Payload {
    /// Serialize `value` into a `Struct` payload.
    ///
    /// Fails with `Serialization` when serde cannot encode the value and
    /// with `PayloadType` when it encodes to something other than an object.
    pub fn from_struct<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        let value =
            serde_json::to_value(value).map_err(|e| ClientError::Serialization(e.to_string()))?;
        check_object(&value)?;
        Ok(Payload::Struct(value))
    }

    /// Encode into the bytes that go on the wire.
    pub fn into_body(self) -> Result<Vec<u8>, ClientError> {
        match self {
            Payload::Raw(bytes) => Ok(bytes),
            Payload::Map(map) => {
                serde_json::to_vec(&map).map_err(|e| ClientError::Serialization(e.to_string()))
            }
            Payload::Struct(value) => {
                check_object(&value)?;
                serde_json::to_vec(&value).map_err(|e| ClientError::Serialization(e.to_string()))
            }
        }
    }
}

fn check_object(value: &Value) -> Result<(), ClientError> {
    if value.is_object() {
        return Ok(());
    }
    Err(ClientError::PayloadType(format!(
        "expected a JSON object, got {}",
        kind(value)
    )))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Payload {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Payload::Map(map)),
            other => Err(ClientError::PayloadType(format!(
                "expected a JSON object, got {}",
                kind(&other)
            ))),
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Raw(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Raw(bytes.to_vec())
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Raw(text.as_bytes().to_vec())
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload::Map(map)
    }
}
