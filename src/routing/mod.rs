//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Table construction (at startup):
//!     builtin endpoints (/, /multi, /cached, /headers, /env, /status)
//!     → StaticRoute[] from ROUTES
//!     → Freeze as immutable RouteTable
//!
//! Incoming request path
//!     → router.rs (exact lookup)
//!     → Return: Endpoint or NoMatch (404)
//! ```
//!
//! # Design Decisions
//! - Exact string match; no prefixes, wildcards or patterns
//! - First registration for a path is authoritative
//! - Deterministic: same path always yields the same endpoint

pub mod router;

pub use router::{Endpoint, RouteTable, BUILTINS};
