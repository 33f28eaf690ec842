//! The value returned by every `HttpClient` call.
//!
//! # Design
//! An `HttpResult` holds either the drained response body or the error that
//! prevented it, never both. Decoding is lazy: each accessor parses the body
//! again, nothing is cached.
//!
//! `to_bytes` and `to_map` report the stored error first. `to_struct` only
//! looks at the body, so on an errored result it fails on the empty body
//! instead. Check `error()` before calling it if the distinction matters.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::http::HttpResponse;

/// Outcome of a single GET or POST exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResult {
    body: Result<Vec<u8>, ClientError>,
    status: Option<u16>,
}

impl HttpResult {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            body: Ok(bytes),
            status: None,
        }
    }

    pub fn from_error(error: ClientError) -> Self {
        Self {
            body: Err(error),
            status: None,
        }
    }

    pub(crate) fn from_response(response: HttpResponse) -> Self {
        Self {
            body: Ok(response.body),
            status: Some(response.status),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.body.is_ok()
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.body.as_ref().err()
    }

    /// Status code of the response, if an exchange took place.
    ///
    /// Informational only: a 4xx or 5xx response is still a successful result.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn to_bytes(&self) -> Result<&[u8], ClientError> {
        match &self.body {
            Ok(bytes) => Ok(bytes.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, ClientError> {
        self.body
    }

    /// Parse the body as a JSON object. A `null` body yields an empty map.
    pub fn to_map(&self) -> Result<Map<String, Value>, ClientError> {
        let bytes = self.to_bytes()?;
        serde_json::from_slice::<Option<Map<String, Value>>>(bytes)
            .map(Option::unwrap_or_default)
            .map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    /// Parse the body into `T`. Does not consult the stored error.
    pub fn to_struct<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let bytes = self.body.as_deref().unwrap_or_default();
        serde_json::from_slice(bytes).map_err(|e| ClientError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Message {
        message: String,
    }

    fn transport_error() -> ClientError {
        ClientError::Transport("connection refused".to_string())
    }

    #[test]
    fn bytes_are_returned_as_stored() {
        let result = HttpResult::from_bytes(br#"{"message": "2"}"#.to_vec());
        assert!(result.is_ok());
        assert!(result.error().is_none());
        assert_eq!(result.to_bytes().unwrap(), br#"{"message": "2"}"#);
    }

    #[test]
    fn map_is_parsed_on_demand() {
        let result = HttpResult::from_bytes(br#"{"message": "2"}"#.to_vec());
        let map = result.to_map().unwrap();
        assert_eq!(map.get("message"), Some(&json!("2")));
        // A second call parses again and yields the same map.
        assert_eq!(result.to_map().unwrap(), map);
    }

    #[test]
    fn struct_is_parsed_on_demand() {
        let result = HttpResult::from_bytes(br#"{"message": "2"}"#.to_vec());
        let message: Message = result.to_struct().unwrap();
        assert_eq!(
            message,
            Message {
                message: "2".to_string()
            }
        );
    }

    #[test]
    fn stored_error_is_returned_by_bytes_and_map() {
        let result = HttpResult::from_error(transport_error());
        assert!(!result.is_ok());
        assert_eq!(result.error(), Some(&transport_error()));
        assert_eq!(result.to_bytes().unwrap_err(), transport_error());
        assert_eq!(result.to_map().unwrap_err(), transport_error());
        assert_eq!(result.clone().into_bytes().unwrap_err(), transport_error());
    }

    #[test]
    fn to_struct_ignores_stored_error() {
        let result = HttpResult::from_error(transport_error());
        let err = result.to_struct::<Message>().unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)), "{err}");
    }

    #[test]
    fn invalid_json_is_a_deserialization_error() {
        let result = HttpResult::from_bytes(b"<html>".to_vec());
        assert!(matches!(
            result.to_map().unwrap_err(),
            ClientError::Deserialization(_)
        ));
        assert!(matches!(
            result.to_struct::<Message>().unwrap_err(),
            ClientError::Deserialization(_)
        ));
    }

    #[test]
    fn non_object_json_is_not_a_map() {
        let result = HttpResult::from_bytes(b"[1, 2]".to_vec());
        assert!(matches!(
            result.to_map().unwrap_err(),
            ClientError::Deserialization(_)
        ));
        let list: Vec<i32> = result.to_struct().unwrap();
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn null_body_is_an_empty_map() {
        let result = HttpResult::from_bytes(b"null".to_vec());
        assert_eq!(result.to_map().unwrap(), Map::new());

        let result = HttpResult::from_bytes(Vec::new());
        assert!(matches!(
            result.to_map().unwrap_err(),
            ClientError::Deserialization(_)
        ));
    }

    #[test]
    fn status_is_kept_from_response() {
        let result = HttpResult::from_response(HttpResponse {
            status: 503,
            headers: Vec::new(),
            body: br#"{"message": "503"}"#.to_vec(),
        });
        assert!(result.is_ok());
        assert_eq!(result.status(), Some(503));
        assert_eq!(HttpResult::from_bytes(Vec::new()).status(), None);
    }
}
