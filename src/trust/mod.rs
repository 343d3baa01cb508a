//! Trusted-proxy network set.
//!
//! # Responsibilities
//! - Compile operator-supplied specs (IP, CIDR, hostname) into networks
//! - Resolve hostnames once, at build time, under a bounded timeout
//! - Answer membership queries for peer and chain addresses
//!
//! # Design Decisions
//! - The set is immutable after build and shared without locking;
//!   re-resolving a hostname means rebuilding the set
//! - An empty set trusts nobody; permissive mode is an explicit flag
//! - Any malformed spec or failed lookup aborts construction

pub mod set;

pub use set::TrustedProxies;
