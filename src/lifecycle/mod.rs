//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Build route table → Bind listener → Serve
//!
//! Shutdown:
//!     ctrl-c (signals.rs), or Shutdown::trigger / drop (shutdown.rs)
//!     → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after configuration is validated

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownListener};
