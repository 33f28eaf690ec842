//! Error type shared by the client, payload encoding and result decoding.
//!
//! # Design
//! Every variant carries the lower-level error's message rather than the
//! error value itself. That keeps `ClientError` cheap to clone, so an
//! errored `HttpResult` can hand the same error to every accessor call.

/// Errors produced while issuing a request or decoding its result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Connection, DNS, protocol or body-read failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// The POST payload has a shape that cannot be sent as a JSON body.
    #[error("unsupported payload type: {0}")]
    PayloadType(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl From<ureq::Error> for ClientError {
    fn from(e: ureq::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}
