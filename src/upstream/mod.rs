//! Upstream caller subsystem.
//!
//! # Data Flow
//! ```text
//! /multi handler
//!     → client.rs (GET http://<target>/, optional timeout)
//!     → body text, or
//!     → error.rs (UpstreamError → 502 / 500 / 504)
//! ```
//!
//! # Design Decisions
//! - One attempt per request: no retries, no caching
//! - Timeout is opt-in; unset means wait for the peer indefinitely
//! - Upstream status codes are not interpreted, only the body is used

pub mod client;
pub mod error;

pub use client::UpstreamClient;
pub use error::UpstreamError;
