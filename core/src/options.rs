//! Connection-pool configuration for `HttpClient`.
//!
//! # Design
//! Options are small tagged values, each targeting exactly one field of
//! `HttpClientOptionSet`. `build_option_set` starts from the defaults and
//! applies the options in order, so a later option for the same field wins.
//! Values are never validated; whatever the caller passes reaches the
//! connector unchanged.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_IDLE_CONNS: usize = 100;
pub const DEFAULT_MAX_IDLE_CONNS_PER_HOST: usize = 100;
pub const DEFAULT_IDLE_CONN_TIMEOUT: Duration = Duration::from_secs(90);

/// Resolved pool settings consumed by `HttpClient::new`.
///
/// Deserializing a partial document fills the missing fields with the
/// defaults. The idle timeout is written as `idle_conn_timeout_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientOptionSet {
    /// Maximum idle connections kept across all hosts.
    pub max_idle_conns: usize,
    /// Maximum idle connections kept for a single host.
    pub max_idle_conns_per_host: usize,
    /// How long an idle connection stays in the pool.
    #[serde(rename = "idle_conn_timeout_secs", with = "secs")]
    pub idle_conn_timeout: Duration,
}

impl Default for HttpClientOptionSet {
    fn default() -> Self {
        Self {
            max_idle_conns: DEFAULT_MAX_IDLE_CONNS,
            max_idle_conns_per_host: DEFAULT_MAX_IDLE_CONNS_PER_HOST,
            idle_conn_timeout: DEFAULT_IDLE_CONN_TIMEOUT,
        }
    }
}

/// A single configuration step. Applying it overwrites one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpClientOption {
    MaxIdleConns(usize),
    MaxIdleConnsPerHost(usize),
    IdleConnTimeout(Duration),
}

impl HttpClientOption {
    pub fn apply(&self, set: &mut HttpClientOptionSet) {
        match *self {
            HttpClientOption::MaxIdleConns(n) => set.max_idle_conns = n,
            HttpClientOption::MaxIdleConnsPerHost(n) => set.max_idle_conns_per_host = n,
            HttpClientOption::IdleConnTimeout(d) => set.idle_conn_timeout = d,
        }
    }
}

pub fn with_max_idle_conns(n: usize) -> HttpClientOption {
    HttpClientOption::MaxIdleConns(n)
}

pub fn with_max_idle_conns_per_host(n: usize) -> HttpClientOption {
    HttpClientOption::MaxIdleConnsPerHost(n)
}

pub fn with_idle_conn_timeout(d: Duration) -> HttpClientOption {
    HttpClientOption::IdleConnTimeout(d)
}

/// Apply `options` in order on top of the defaults.
pub fn build_option_set<I>(options: I) -> HttpClientOptionSet
where
    I: IntoIterator<Item = HttpClientOption>,
{
    let mut set = HttpClientOptionSet::default();
    for option in options {
        option.apply(&mut set);
    }
    set
}

/// Serde adapter writing a `Duration` as fractional seconds.
mod secs {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(de::Error::custom)
    }
}
