//! Diagnostic HTTP Probe
//!
//! A small server used to exercise a request-routing layer (service mesh,
//! load balancer) from the inside. It echoes request metadata, chains calls
//! to another instance of itself and lets callers pick caching headers and
//! status codes.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 MESH PROBE                   │
//!   Client Request   │  ┌──────────┐    ┌────────────┐              │
//!   ─────────────────┼─▶│  http    │───▶│  routing   │              │
//!                    │  │ server   │    │ RouteTable │              │
//!                    │  └──────────┘    └─────┬──────┘              │
//!                    │                        │ Endpoint            │
//!                    │                        ▼                     │
//!   Client Response  │  ┌──────────┐    ┌────────────┐   ┌────────┐ │
//!   ◀────────────────┼──│ response │◀───│  handlers  │──▶│upstream│─┼──▶ Peer
//!                    │  └──────────┘    └─────┬──────┘   └────────┘ │   (COMPONENT_TARGET)
//!                    │                        │                     │
//!                    │                  ┌─────▼──────┐              │
//!                    │                  │environment │              │
//!                    │                  └────────────┘              │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tokio::net::TcpListener;

use mesh_probe::config::load_from_env;
use mesh_probe::observability::logging;
use mesh_probe::{HttpServer, ProcessEnv, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("mesh-probe v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let bind_address = config.listener.bind_address();
    tracing::info!(
        bind_address = %bind_address,
        static_routes = config.routes.len(),
        "Configuration loaded"
    );

    let server = HttpServer::new(config, Arc::new(ProcessEnv));

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Server listening");

    // Only ctrl-c stops the standalone binary; the handle lives until main returns
    let shutdown = Shutdown::new();
    server.run(listener, shutdown.listener()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
