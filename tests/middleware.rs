//! Middleware integration: resolver wired into an Axum router.

mod common;

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use realip::{real_ip_middleware, ClientIp, RealIpConfig};
use tower::ServiceExt;

use common::{proxied_config, resolver};

async fn show_ip(ClientIp(ip): ClientIp) -> String {
    ip.to_string()
}

async fn app(config: RealIpConfig) -> Router {
    Router::new()
        .route("/", get(show_ip))
        .layer(from_fn_with_state(resolver(config).await, real_ip_middleware))
}

fn request(peer: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri("/");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let mut req = builder.body(Body::empty()).unwrap();
    req.extensions_mut()
        .insert(ConnectInfo(peer.parse::<SocketAddr>().unwrap()));
    req
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn handler_sees_resolved_ip() {
    let app = app(proxied_config()).await;

    let response = app
        .oneshot(request(
            "192.168.0.1:5000",
            &[("X-Forwarded-For", "1.1.1.1,2.2.2.2")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "2.2.2.2");
}

#[tokio::test]
async fn handler_sees_peer_for_untrusted_downstream() {
    let app = app(proxied_config()).await;

    let response = app
        .oneshot(request(
            "10.0.0.1:5000",
            &[("X-Forwarded-For", "1.1.1.1,2.2.2.2")],
        ))
        .await
        .unwrap();

    assert_eq!(body_string(response).await, "10.0.0.1");
}

#[tokio::test]
async fn trusted_header_reaches_handler() {
    let app = app(RealIpConfig {
        trusted_header: Some("Cf-Connecting-IP".to_string()),
        ..proxied_config()
    })
    .await;

    let response = app
        .oneshot(request(
            "192.168.0.1:5000",
            &[
                ("X-Forwarded-For", "1.1.1.1,2.2.2.2"),
                ("Cf-Connecting-Ip", "8.8.8.8"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(body_string(response).await, "8.8.8.8");
}

#[tokio::test]
async fn missing_peer_address_is_rejected() {
    let app = app(proxied_config()).await;

    // No ConnectInfo extension: the server was not wired with
    // into_make_service_with_connect_info.
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn extractor_rejects_without_middleware() {
    let app = Router::new().route("/", get(show_ip));

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
