//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Client IP resolution configuration.
///
/// Built once per process (or per server instance) and compiled into a
/// [`Resolver`](crate::Resolver) before the first request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RealIpConfig {
    /// Header whose raw value is believed outright, bypassing all
    /// trust-chain logic (e.g. "Cf-Connecting-IP" behind a CDN that
    /// strips client-supplied copies). `None` or empty disables it.
    pub trusted_header: Option<String>,

    /// Candidate forwarding headers, checked in order when the peer is
    /// a trusted proxy.
    pub ip_headers: Vec<String>,

    /// Trusted reverse proxies: IP literals, CIDR blocks, or hostnames
    /// resolved once at construction time.
    pub trusted_proxies: Vec<String>,

    /// Treat every downstream peer as a trusted proxy, regardless of
    /// `trusted_proxies`. Off by default: an empty proxy list trusts
    /// nobody. Only enable for single-proxy deployments where the
    /// forwarding header is known to be scrubbed upstream.
    pub trust_all_downstream: bool,
}

impl Default for RealIpConfig {
    fn default() -> Self {
        Self {
            trusted_header: None,
            ip_headers: vec!["X-Real-IP".to_string(), "X-Forwarded-For".to_string()],
            trusted_proxies: Vec::new(),
            trust_all_downstream: false,
        }
    }
}
