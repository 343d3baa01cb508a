//! Axum middleware surface.
//!
//! The resolver itself is transport-agnostic; this module is the thin
//! adapter that reads the peer address from `ConnectInfo`, resolves the
//! client IP, and attaches it to the request extensions for downstream
//! handlers.

pub mod real_ip;

pub use real_ip::{real_ip_middleware, ClientIp};
