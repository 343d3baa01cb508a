//! Shared helpers for integration tests.

use std::sync::Arc;

use realip::{RealIpConfig, Resolver};

/// Install a test subscriber so resolution traces show up under
/// `--nocapture`. Safe to call from every test; repeat installs are
/// ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "realip=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Compile a config, panicking on invalid specs (test-only).
pub async fn resolver(config: RealIpConfig) -> Arc<Resolver> {
    init_tracing();
    Arc::new(Resolver::new(config).await.expect("config must compile"))
}

/// The standard test topology: one trusted proxy network in front.
pub fn proxied_config() -> RealIpConfig {
    RealIpConfig {
        trusted_proxies: vec!["192.168.0.0/16".to_string()],
        ..Default::default()
    }
}
