//! Forwarding-chain walk.
//!
//! A forwarding header carries a comma-separated chain built left to
//! right: each hop appends the address it received the request from, so
//! the rightmost token was appended by the (already verified) network
//! peer and earlier tokens come from hops further upstream that have
//! not been verified.

use std::net::IpAddr;

use crate::trust::TrustedProxies;

/// Walk a chain from right to left and return the first address that
/// cannot be proven forwarded by a trusted hop.
///
/// The rightmost token is accepted unconditionally; it came from the
/// verified peer. Each earlier token is accepted only while the token
/// to its right is itself a trusted proxy. A token that does not parse
/// as an IP breaks the chain of custody: the walk stops and the best
/// candidate so far is returned (`None` if the rightmost token itself
/// is malformed). If the walk runs off the left end, the whole chain
/// consisted of trusted relays and the leftmost token is the answer.
pub fn walk(header_value: &str, proxies: &TrustedProxies) -> Option<IpAddr> {
    let mut best: Option<IpAddr> = None;
    let mut right_hop: Option<IpAddr> = None;

    for token in header_value.rsplit(',') {
        let ip = match token.trim().parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => return best,
        };

        match right_hop {
            // Rightmost token: appended by the verified peer.
            None => best = Some(ip),
            // This token was appended by the hop to its right; believe
            // it only if that hop is a trusted relay.
            Some(right) if proxies.contains(right) => best = Some(ip),
            Some(_) => return best,
        }
        right_hop = Some(ip);
    }

    best
}
