//! Outbound HTTP GET to a peer instance.

use axum::body::Body;
use axum::http::{header, Method, Request};
use hyper::body::Incoming;
use hyper::Response;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::time::Duration;
use tokio::time;

use crate::config::UpstreamConfig;
use crate::upstream::error::{error_chain, UpstreamError};

const USER_AGENT: &str = concat!("mesh-probe/", env!("CARGO_PKG_VERSION"));

/// Client used by the chaining endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    timeout: Option<Duration>,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            timeout: config.timeout(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// GET `http://<target>/` and return the body as text.
    ///
    /// Any response status counts as success; only transport failures are
    /// errors. Without a configured timeout this waits as long as the peer does.
    pub async fn fetch(&self, target: &str) -> Result<String, UpstreamError> {
        match self.timeout {
            Some(limit) => time::timeout(limit, self.fetch_inner(target))
                .await
                .map_err(|_| UpstreamError::Timeout {
                    target: target.to_string(),
                    after: limit,
                })?,
            None => self.fetch_inner(target).await,
        }
    }

    async fn fetch_inner(&self, target: &str) -> Result<String, UpstreamError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(format!("http://{target}/"))
            .header(header::USER_AGENT, USER_AGENT)
            .body(Body::empty())
            .map_err(|e| UpstreamError::InvalidTarget {
                target: target.to_string(),
                detail: error_chain(&e),
            })?;

        let response: Response<Incoming> =
            self.client
                .request(request)
                .await
                .map_err(|e| UpstreamError::Connect {
                    target: target.to_string(),
                    detail: error_chain(&e),
                })?;

        tracing::debug!(target_addr = %target, status = %response.status(), "Upstream responded");

        read_body(response.into_body())
            .await
            .map_err(|e| UpstreamError::Read {
                target: target.to_string(),
                detail: error_chain(&e),
            })
    }
}

/// Drain a response body into text. Invalid UTF-8 is replaced, not rejected.
async fn read_body(body: Incoming) -> Result<String, axum::Error> {
    let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
