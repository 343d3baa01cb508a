//! Resolver construction and orchestration.

use std::net::IpAddr;

use axum::http::header::HeaderName;
use axum::http::HeaderMap;

use crate::config::schema::RealIpConfig;
use crate::error::{ConfigError, ResolveError};
use crate::resolver::chain;
use crate::trust::TrustedProxies;

/// Compiled, immutable client IP resolver.
///
/// Built once from a [`RealIpConfig`]; safe to share via `Arc` across
/// any number of concurrent resolution calls.
#[derive(Debug, Clone)]
pub struct Resolver {
    trusted_header: Option<HeaderName>,
    ip_headers: Vec<HeaderName>,
    proxies: TrustedProxies,
}

impl Resolver {
    /// Compile a configuration into a resolver.
    ///
    /// Header names are validated and hostname proxy specs resolved
    /// here; any invalid spec is a fatal [`ConfigError`]. Nothing on
    /// the per-request path can fail because of configuration.
    pub async fn new(config: RealIpConfig) -> Result<Self, ConfigError> {
        let trusted_header = match config.trusted_header.as_deref() {
            None | Some("") => None,
            Some(name) => Some(parse_header_name(name)?),
        };

        let mut ip_headers = Vec::with_capacity(config.ip_headers.len());
        for name in &config.ip_headers {
            ip_headers.push(parse_header_name(name)?);
        }

        let proxies =
            TrustedProxies::build(&config.trusted_proxies, config.trust_all_downstream).await?;

        Ok(Self {
            trusted_header,
            ip_headers,
            proxies,
        })
    }

    /// Resolve the client IP for a request.
    ///
    /// Order, first success wins:
    /// 1. the trusted header, if configured and a single valid IP;
    /// 2. if the peer is a trusted proxy, the first candidate header
    ///    whose chain walk yields a result;
    /// 3. the peer address itself.
    ///
    /// `peer_addr` must be `host:port` (IPv6 hosts bracketed) with an
    /// IP host; a missing port separator or unparsable host is
    /// [`ResolveError::InvalidRemoteAddr`]. The port itself is not
    /// inspected.
    pub fn resolve(&self, peer_addr: &str, headers: &HeaderMap) -> Result<IpAddr, ResolveError> {
        if let Some(ip) = self.from_trusted_header(headers) {
            return Ok(ip);
        }

        let peer = split_host(peer_addr)
            .and_then(|host| host.parse::<IpAddr>().ok())
            .ok_or_else(|| ResolveError::InvalidRemoteAddr {
                addr: peer_addr.to_string(),
            })?;

        Ok(self.from_forwarding_headers(peer, headers))
    }

    /// Resolve for a caller that already holds a typed peer address
    /// (e.g. from `ConnectInfo`). Infallible: the trusted-header and
    /// forwarding-header paths fall back to the peer itself.
    pub fn resolve_peer(&self, peer: IpAddr, headers: &HeaderMap) -> IpAddr {
        if let Some(ip) = self.from_trusted_header(headers) {
            return ip;
        }
        self.from_forwarding_headers(peer, headers)
    }

    /// The compiled trusted-proxy set.
    pub fn proxies(&self) -> &TrustedProxies {
        &self.proxies
    }

    /// Trusted-header bypass: believed outright, no trust-chain logic.
    fn from_trusted_header(&self, headers: &HeaderMap) -> Option<IpAddr> {
        let name = self.trusted_header.as_ref()?;
        let value = headers.get(name)?.to_str().ok()?;
        value.trim().parse::<IpAddr>().ok()
    }

    fn from_forwarding_headers(&self, peer: IpAddr, headers: &HeaderMap) -> IpAddr {
        if self.proxies.contains(peer) {
            for name in &self.ip_headers {
                let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) else {
                    continue;
                };
                if let Some(ip) = chain::walk(value, &self.proxies) {
                    tracing::debug!(header = %name, client_ip = %ip, "Client IP from forwarding header");
                    return ip;
                }
            }
        }
        peer
    }
}

/// Split `host:port` on the last colon and strip IPv6 brackets.
/// Only the host half matters downstream; the port is carried by every
/// transport's peer address but plays no part in resolution.
fn split_host(peer_addr: &str) -> Option<&str> {
    let (host, _port) = peer_addr.rsplit_once(':')?;
    Some(
        host.strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host),
    )
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::try_from(name).map_err(|source| ConfigError::InvalidHeaderName {
        name: name.to_string(),
        source,
    })
}
