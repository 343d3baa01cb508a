//! Trust-aware client IP resolution for proxied HTTP services.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or in-code RealIpConfig
//!     → Resolver::new (compile headers, build trust set, one-shot DNS)
//!     → Resolver (validated, immutable)
//!     → shared via Arc across all requests
//!
//! Per request:
//!     peer address + headers
//!     → trusted-header bypass, if configured
//!     → peer trusted? walk candidate forwarding headers right-to-left
//!     → resolved client IP (or peer fallback)
//! ```
//!
//! # Design Decisions
//! - All configuration is validated at construction; resolution never
//!   panics and never fails except on an unparsable peer address
//! - An empty trusted-proxy set trusts nobody; the permissive mode is
//!   an explicit config flag, never a default
//! - Resolution is pure and synchronous; the only I/O in the crate is
//!   the bounded hostname lookup at build time

pub mod config;
pub mod error;
pub mod middleware;
pub mod resolver;
pub mod trust;

pub use config::loader::load_config;
pub use config::schema::RealIpConfig;
pub use error::{ConfigError, ResolveError};
pub use middleware::{real_ip_middleware, ClientIp};
pub use resolver::Resolver;
pub use trust::TrustedProxies;
