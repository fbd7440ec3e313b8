//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, one task per connection)
//!     → request.rs (snapshot path, query, headers)
//!     → [routing layer picks the endpoint]
//!     → handlers.rs (builtin or static endpoint)
//!     → response.rs (headers, error bodies)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{QueryParams, RequestContext, RequestId};
pub use server::{AppState, HttpServer};
