//! Compiled set of trusted proxy networks.

use std::net::IpAddr;
use std::time::Duration;

use ipnet::IpNet;

use crate::error::ConfigError;

/// Bound on each hostname lookup at build time. Failure is fatal, not
/// retried.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable collection of IP networks representing trusted reverse
/// proxies. IPv4 and IPv6 networks coexist.
#[derive(Debug, Clone, Default)]
pub struct TrustedProxies {
    networks: Vec<IpNet>,
    trust_all: bool,
}

impl TrustedProxies {
    /// Compile proxy specs into networks. Each spec is an IP literal
    /// (singleton /32 or /128), a CIDR block, or a hostname resolved
    /// via DNS right here; every address a hostname resolves to is
    /// added as a singleton network.
    ///
    /// Any malformed spec or failed lookup is a fatal [`ConfigError`];
    /// bad configuration must be caught before traffic is accepted.
    pub async fn build(specs: &[String], trust_all: bool) -> Result<Self, ConfigError> {
        let mut networks = Vec::new();

        for spec in specs {
            if spec.contains('/') {
                let net = spec
                    .parse::<IpNet>()
                    .map_err(|source| ConfigError::InvalidProxy {
                        spec: spec.clone(),
                        source,
                    })?;
                networks.push(net);
            } else if let Ok(ip) = spec.parse::<IpAddr>() {
                networks.push(IpNet::from(ip));
            } else {
                networks.extend(lookup(spec).await?);
            }
        }

        tracing::debug!(
            networks = networks.len(),
            trust_all,
            "Trusted proxy set compiled"
        );

        Ok(Self { networks, trust_all })
    }

    /// True iff any network in the set contains `ip`. An empty set
    /// trusts nobody unless the permissive flag was set.
    pub fn contains(&self, ip: IpAddr) -> bool {
        if self.trust_all {
            return true;
        }
        // Compare IPv4-mapped IPv6 peers against IPv4 networks.
        let ip = ip.to_canonical();
        self.networks.iter().any(|net| net.contains(&ip))
    }

    /// Number of compiled networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// True if no networks were configured.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

/// Resolve a hostname spec to singleton networks, bounded by
/// [`LOOKUP_TIMEOUT`].
async fn lookup(host: &str) -> Result<Vec<IpNet>, ConfigError> {
    let lookup = tokio::net::lookup_host((host, 0));
    let addrs = match tokio::time::timeout(LOOKUP_TIMEOUT, lookup).await {
        Ok(Ok(addrs)) => addrs,
        Ok(Err(source)) => {
            return Err(ConfigError::HostnameResolution {
                host: host.to_string(),
                source: Some(source),
            })
        }
        Err(_) => {
            return Err(ConfigError::LookupTimeout {
                host: host.to_string(),
            })
        }
    };

    let networks: Vec<IpNet> = addrs.map(|addr| IpNet::from(addr.ip())).collect();
    if networks.is_empty() {
        return Err(ConfigError::HostnameResolution {
            host: host.to_string(),
            source: None,
        });
    }
    Ok(networks)
}
