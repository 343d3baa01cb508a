//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → RealIpConfig (plain schema, defaults applied)
//!     → Resolver::new (semantic validation: CIDR/IP/hostname specs,
//!       header names; all failures fatal here)
//!     → Resolver (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once compiled into a `Resolver`; changes
//!   require constructing a new one
//! - All fields have defaults so a minimal config works
//! - Syntactic validation (serde) is separate from semantic checks,
//!   which run in `Resolver::new` before traffic is accepted

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::RealIpConfig;
