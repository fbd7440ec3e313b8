//! Route lookup.
//!
//! # Responsibilities
//! - Store the endpoint registered for each path
//! - Look up the endpoint for a request path
//! - Return an explicit no-match rather than a silent default
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - O(1) exact-path lookup via HashMap
//! - First registration of a path wins; builtins are registered first

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::StaticRoute;

/// What a registered path does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `/`: echo the request path.
    Echo,
    /// `/multi`: greet and chain to the configured peer.
    Multi,
    /// `/cached`: fresh identifier with optional `Cache-Control`.
    Cached,
    /// `/headers`: echo request headers.
    Headers,
    /// `/env`: echo environment variables.
    Env,
    /// `/status`: fresh identifier with a caller-chosen status.
    Status,
    /// A configured literal body.
    Static(StaticRoute),
}

/// Builtin endpoints in registration order.
pub const BUILTINS: [(&str, Endpoint); 6] = [
    ("/", Endpoint::Echo),
    ("/multi", Endpoint::Multi),
    ("/cached", Endpoint::Cached),
    ("/headers", Endpoint::Headers),
    ("/env", Endpoint::Env),
    ("/status", Endpoint::Status),
];

/// Exact-match mapping from path to endpoint.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Endpoint>,
    /// Registration order, for logging.
    order: Vec<String>,
}

impl RouteTable {
    /// Build the table: builtins first, then static routes in the given order.
    pub fn new(static_routes: &[StaticRoute]) -> Self {
        let mut table = Self::default();

        for (path, endpoint) in BUILTINS {
            table.register(path, endpoint);
        }

        for route in static_routes {
            if !table.register(&route.path, Endpoint::Static(route.clone())) {
                tracing::warn!(
                    path = %route.path,
                    "Static route shadowed by an earlier registration, ignoring"
                );
            }
        }

        table
    }

    /// Register `endpoint` at `path` unless the path is already taken.
    ///
    /// Returns `false` when an earlier registration keeps the path.
    pub fn register(&mut self, path: &str, endpoint: Endpoint) -> bool {
        match self.routes.entry(path.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(endpoint);
                self.order.push(path.to_string());
                true
            }
        }
    }

    /// Endpoint registered for exactly `path`.
    pub fn lookup(&self, path: &str) -> Option<&Endpoint> {
        self.routes.get(path)
    }

    /// Registered paths in registration order.
    pub fn paths(&self) -> &[String] {
        &self.order
    }
}
