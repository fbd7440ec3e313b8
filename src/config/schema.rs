//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! Every value originates from a flat environment variable; the serde derives
//! let the effective configuration be dumped at startup.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProbeConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// Identity of this component and the peer it chains to.
    pub component: ComponentConfig,

    /// Static routes declared through `ROUTES`.
    pub routes: Vec<StaticRoute>,

    /// Outbound call settings for the chaining endpoint.
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
        }
    }
}

/// Who this instance is and which peer `/multi` talks to.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ComponentConfig {
    /// Name used in the `/multi` greeting.
    pub name: String,

    /// `host:port` of the peer to chain to. `None` disables the outbound call.
    pub target: Option<String>,
}

/// A path/body pair declared through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaticRoute {
    /// Absolute request path, always starting with `/`.
    pub path: String,

    /// Literal response body.
    pub body: String,
}

impl StaticRoute {
    pub fn new(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }
}

/// Outbound call configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Total time budget for the outbound call in milliseconds.
    /// `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
