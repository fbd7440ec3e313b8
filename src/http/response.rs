//! Response construction helpers.
//!
//! # Responsibilities
//! - Plain-text bodies with explicit content headers
//! - Error responses in the `text/plain` + `nosniff` shape
//! - The default not-found response for unregistered paths

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Headers marking a body as plain text that must not be sniffed.
pub fn plain_text_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(TEXT_PLAIN_UTF8),
        ),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
    ]
}

/// Plain-text response with the given status.
pub fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    (status, plain_text_headers(), body.into()).into_response()
}

/// Error response: the message followed by a newline.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    plain_text(status, format!("{message}\n"))
}

/// Response for a path with no registered endpoint.
pub fn not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
