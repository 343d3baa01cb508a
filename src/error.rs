//! Error types for configuration and per-request resolution.
//!
//! Configuration errors are fatal: they abort startup and never surface
//! on the request path. The only per-request error is an unparsable
//! peer address, which the caller should map to a client-error response.

use axum::http::header::InvalidHeaderName;
use thiserror::Error;

/// Fatal construction-time error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A trusted-proxy spec was not a valid IP literal or CIDR block.
    #[error("invalid trusted proxy {spec:?}: {source}")]
    InvalidProxy {
        spec: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    /// A hostname spec failed to resolve, or resolved to no addresses.
    #[error("hostname {host:?} did not resolve to any address")]
    HostnameResolution {
        host: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The DNS lookup for a hostname spec exceeded its bound.
    #[error("dns lookup for {host:?} timed out")]
    LookupTimeout { host: String },

    /// A configured header name is not a valid HTTP header name.
    #[error("invalid header name {name:?}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },

    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be deserialized.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-request resolution error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The peer address is not `host:port` with an IP host. No client
    /// IP can be determined at all; there is no fallback.
    #[error("invalid remote address {addr:?}")]
    InvalidRemoteAddr { addr: String },
}
