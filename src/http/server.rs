//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Build the Route Table from configuration
//! - Create the Axum Router with a single dispatching fallback
//! - Wire up middleware (request tracing)
//! - Serve connections until shutdown

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{ComponentConfig, ProbeConfig};
use crate::environment::Environment;
use crate::http::handlers;
use crate::http::request::RequestContext;
use crate::http::response::not_found;
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::ShutdownListener;
use crate::routing::{Endpoint, RouteTable};
use crate::upstream::UpstreamClient;

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub component: Arc<ComponentConfig>,
    pub upstream: UpstreamClient,
    pub env: Arc<dyn Environment>,
}

/// Diagnostic HTTP server.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server.
    ///
    /// `env` backs the `/env` endpoint; everything else comes from `config`.
    pub fn new(config: ProbeConfig, env: Arc<dyn Environment>) -> Self {
        let routes = Arc::new(RouteTable::new(&config.routes));
        let upstream = UpstreamClient::new(&config.upstream);

        tracing::info!(
            routes = ?routes.paths(),
            component = %config.component.name,
            component_target = ?config.component.target,
            upstream_timeout = ?upstream.timeout(),
            "Route table built"
        );

        let state = AppState {
            routes,
            component: Arc::new(config.component.clone()),
            upstream,
            env,
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Every request, whatever its method or path, goes through `dispatch`.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until ctrl-c or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.wait() => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Match the request path against the Route Table and run the endpoint.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, _) = request.into_parts();
    let ctx = RequestContext::from_parts(&parts);

    let Some(endpoint) = state.routes.lookup(&ctx.path) else {
        tracing::debug!(method = %ctx.method, path = %ctx.path, "No route matched");
        return not_found();
    };

    match endpoint {
        Endpoint::Echo => handlers::echo(&ctx),
        Endpoint::Multi => handlers::multi(&state.component, &state.upstream).await,
        Endpoint::Cached => handlers::cached(&ctx),
        Endpoint::Headers => handlers::headers(&ctx),
        Endpoint::Env => handlers::env(&ctx, state.env.as_ref()),
        Endpoint::Status => handlers::status(&ctx),
        Endpoint::Static(route) => handlers::static_body(route),
    }
}
