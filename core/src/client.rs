//! Blocking GET/POST executor.
//!
//! # Design
//! `HttpClient` owns a `Transport` and nothing else, so it carries no mutable
//! state between calls and can be shared across threads. Each call is one
//! synchronous exchange: build the request, execute it, wrap the drained
//! body (or the error) in an `HttpResult`. Status codes are never inspected.

use serde::Serialize;
use tracing::debug;

use crate::http::{HttpRequest, Transport, UreqTransport};
use crate::options::HttpClientOptionSet;
use crate::payload::Payload;
use crate::result::HttpResult;

/// Connection-pooled HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClient<T = UreqTransport> {
    transport: T,
}

impl HttpClient<UreqTransport> {
    /// Build a client whose pool uses exactly the settings in `options`.
    pub fn new(options: &HttpClientOptionSet) -> Self {
        Self::with_transport(UreqTransport::new(options))
    }

    pub fn options(&self) -> &HttpClientOptionSet {
        self.transport.options()
    }
}

impl Default for HttpClient<UreqTransport> {
    fn default() -> Self {
        Self::new(&HttpClientOptionSet::default())
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue a GET and return the whole response body, whatever the status.
    pub fn get(&self, url: &str) -> HttpResult {
        self.send(HttpRequest::get(url))
    }

    /// Encode `payload` and POST it as `application/json`.
    ///
    /// An unsupported payload fails here, before any request is issued.
    pub fn post(&self, url: &str, payload: Payload) -> HttpResult {
        match payload.into_body() {
            Ok(body) => self.send(HttpRequest::post(url, body)),
            Err(e) => {
                debug!(url, error = %e, "rejected POST payload");
                HttpResult::from_error(e)
            }
        }
    }

    /// POST a serializable value. It must serialize to a JSON object.
    pub fn post_json<V: Serialize + ?Sized>(&self, url: &str, value: &V) -> HttpResult {
        match Payload::from_struct(value) {
            Ok(payload) => self.post(url, payload),
            Err(e) => {
                debug!(url, error = %e, "rejected POST payload");
                HttpResult::from_error(e)
            }
        }
    }

    fn send(&self, request: HttpRequest) -> HttpResult {
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(method, url = %url, "sending request");
        match self.transport.execute(request) {
            Ok(response) => {
                debug!(
                    method,
                    url = %url,
                    status = response.status,
                    bytes = response.body.len(),
                    "received response"
                );
                HttpResult::from_response(response)
            }
            Err(e) => {
                debug!(method, url = %url, error = %e, "request failed");
                HttpResult::from_error(e)
            }
        }
    }
}
