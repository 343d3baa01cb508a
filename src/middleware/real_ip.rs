//! Client IP middleware and extractor.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::resolver::Resolver;

/// Resolved client IP, attached to request extensions by
/// [`real_ip_middleware`] and readable in handlers as an extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<ClientIp>().copied().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "client IP middleware not installed",
        ))
    }
}

/// Resolve the client IP for each request and attach it as a
/// [`ClientIp`] extension.
///
/// Install with `axum::middleware::from_fn_with_state` on a router
/// served via `into_make_service_with_connect_info::<SocketAddr>()`.
/// A request without a peer address is rejected with 400; no client IP
/// can be determined for it at all.
pub async fn real_ip_middleware(
    State(resolver): State<Arc<Resolver>>,
    mut req: Request,
    next: Next,
) -> Response {
    let peer = match req.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(addr)) => addr.ip(),
        None => {
            tracing::warn!("Peer address unavailable; is ConnectInfo wired into the server?");
            return (StatusCode::BAD_REQUEST, "invalid remote address").into_response();
        }
    };

    let ip = resolver.resolve_peer(peer, req.headers());
    req.extensions_mut().insert(ClientIp(ip));
    next.run(req).await
}
