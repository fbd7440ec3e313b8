//! Diagnostic HTTP server library.

pub mod config;
pub mod environment;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::schema::ProbeConfig;
pub use environment::{Environment, MapEnv, ProcessEnv};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
