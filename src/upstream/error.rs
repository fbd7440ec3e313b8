//! Upstream call failures.

use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single outbound call. Messages embed the target.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// `COMPONENT_TARGET` does not form a valid URI.
    #[error("error talking to {target}: invalid target: {detail}")]
    InvalidTarget { target: String, detail: String },

    /// No response head was received.
    #[error("error talking to {target}: {detail}")]
    Connect { target: String, detail: String },

    /// The response head arrived but the body could not be read.
    #[error("error talking to {target}: {detail}")]
    Read { target: String, detail: String },

    /// The configured time budget elapsed.
    #[error("error talking to {target}: no response within {after:?}")]
    Timeout { target: String, after: Duration },
}

impl UpstreamError {
    /// Status code reported to the downstream caller.
    pub fn status(&self) -> StatusCode {
        match self {
            UpstreamError::InvalidTarget { .. } | UpstreamError::Connect { .. } => {
                StatusCode::BAD_GATEWAY
            }
            UpstreamError::Read { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            UpstreamError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            UpstreamError::InvalidTarget { target, .. }
            | UpstreamError::Connect { target, .. }
            | UpstreamError::Read { target, .. }
            | UpstreamError::Timeout { target, .. } => target,
        }
    }
}

/// Render an error and its sources as `outer: inner: root`.
///
/// hyper's top-level errors are terse ("client error (Connect)"); the cause
/// is only visible further down the chain.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
