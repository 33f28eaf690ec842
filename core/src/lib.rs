//! Minimal blocking HTTP client with a configurable connection pool.
//!
//! # Overview
//! `HttpClient` issues GET and POST requests, reads each response body in
//! full and hands back an `HttpResult` that decodes lazily into bytes, a
//! JSON map or any deserializable type.
//!
//! # Design
//! - Pool settings are resolved once into an `HttpClientOptionSet` by
//!   applying `HttpClientOption` steps over the defaults.
//! - The network sits behind the `Transport` trait. `UreqTransport` is the
//!   default; tests plug in their own.
//! - Errors are values: a failed call yields an `HttpResult` carrying a
//!   `ClientError`, never a panic. Status codes are not interpreted.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use khttp::{build_option_set, with_idle_conn_timeout, with_max_idle_conns, HttpClient};
//!
//! let options = build_option_set([
//!     with_max_idle_conns(32),
//!     with_idle_conn_timeout(Duration::from_secs(30)),
//! ]);
//! let client = HttpClient::new(&options);
//! let map = client.get("http://localhost:8080/?num=1").to_map();
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod options;
pub mod payload;
pub mod result;

pub use client::HttpClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use options::{
    build_option_set, with_idle_conn_timeout, with_max_idle_conns, with_max_idle_conns_per_host,
    HttpClientOption, HttpClientOptionSet,
};
pub use payload::Payload;
pub use result::HttpResult;
