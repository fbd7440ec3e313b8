//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (flat KEY=value)
//!     → loader.rs (lookup, parse ROUTES, validate values)
//!     → ProbeConfig (validated, immutable)
//!     → handed to HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults so an empty environment is a valid config
//! - `/env` is the only feature that reads the environment live

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, load_from_lookup, parse_routes, ConfigError};
pub use schema::{ComponentConfig, ListenerConfig, ProbeConfig, StaticRoute, UpstreamConfig};
