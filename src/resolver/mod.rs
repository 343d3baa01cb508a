//! Client IP resolution.
//!
//! # Responsibilities
//! - Trusted-header bypass for edge infrastructure (CDN)
//! - Peer-address trust check against the compiled proxy set
//! - Right-to-left walk of candidate forwarding headers
//! - Fallback to the peer address
//!
//! # Design Decisions
//! - Resolution is a pure, synchronous computation over immutable
//!   inputs; no I/O, no locking, no per-request state
//! - A header that yields nothing is never an error; the resolver
//!   silently tries the next candidate or falls back to the peer

pub mod chain;
pub mod resolver;

pub use resolver::Resolver;
