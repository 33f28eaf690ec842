//! HTTP exchange types and the transport seam.
//!
//! # Design
//! Requests and responses are plain owned data. `HttpClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and wraps whatever comes back.
//! `UreqTransport` is the production transport; tests substitute their own
//! to observe what would have gone over the wire.

use std::fmt;

use tracing::debug;

use crate::error::ClientError;
use crate::options::HttpClientOptionSet;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A GET carries no headers and no body.
    pub fn get(url: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A POST carries exactly one header, the JSON content type.
    pub fn post(url: &str, body: Vec<u8>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// A fully drained HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Executes one request/response exchange.
///
/// Implementations must read the whole response body before returning and
/// must report any status code as a response, never as an error.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Blocking transport over a pooled `ureq::Agent`.
///
/// Cloning shares the agent, and with it the connection pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    options: HttpClientOptionSet,
}

impl UreqTransport {
    pub fn new(options: &HttpClientOptionSet) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_idle_connections(options.max_idle_conns)
            .max_idle_connections_per_host(options.max_idle_conns_per_host)
            .max_idle_age(options.idle_conn_timeout)
            // Connect directly; proxy environment variables are not consulted.
            .proxy(None)
            .build()
            .new_agent();
        debug!(
            max_idle_conns = options.max_idle_conns,
            max_idle_conns_per_host = options.max_idle_conns_per_host,
            idle_conn_timeout = ?options.idle_conn_timeout,
            "configured connection pool"
        );
        Self {
            agent,
            options: *options,
        }
    }

    /// The pool settings this transport was built with.
    pub fn options(&self) -> &HttpClientOptionSet {
        &self.options
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut response = match (method, body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&url);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.call()?
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&url);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                match body {
                    Some(body) => builder.send(body.as_slice())?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        // No size cap: the caller asked for the whole body.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
