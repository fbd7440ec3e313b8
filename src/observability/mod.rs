//! Observability subsystem.
//!
//! All subsystems emit `tracing` events with structured fields; `logging.rs`
//! installs the subscriber that writes them to stdout. Per-request spans come
//! from the `TraceLayer` in the HTTP server.

pub mod logging;
