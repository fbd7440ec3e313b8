//! Request context extraction and response identifiers.
//!
//! # Responsibilities
//! - Snapshot method, path, query and headers into a read-only context
//! - Percent-decode the path before it is matched or echoed
//! - Decode repeated query parameters in the order received
//! - Generate unique identifiers for response bodies
//! - Lenient integer parsing for query parameters

use axum::http::{request::Parts, HeaderMap, Method};
use percent_encoding::percent_decode_str;
use std::fmt;
use std::num::IntErrorKind;
use uuid::Uuid;

/// Query parameters as an ordered multi-map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    /// First value for `key`, if the key occurs at all.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Read-only per-request view handed to endpoint handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            method: parts.method.clone(),
            path: decode_path(parts.uri.path()),
            query: QueryParams::parse(parts.uri.query()),
            headers: parts.headers.clone(),
        }
    }
}

/// Percent-decode a request path.
///
/// Malformed escapes are kept verbatim and invalid UTF-8 is replaced.
pub fn decode_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Unique opaque token written by `/cached` and `/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Parse a decimal integer, `None` when the input is not a number.
///
/// Out-of-range numbers saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_int(raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_query_first_of_repeated_keys() {
        let query = QueryParams::parse(Some("key=X-One&other=1&key=X-Two"));
        assert_eq!(query.first("key"), Some("X-One"));
        assert_eq!(query.first("missing"), None);
    }

    #[test]
    fn test_query_decoding() {
        let query = QueryParams::parse(Some("key=a%20b&flag&plus=c+d"));
        assert_eq!(query.first("key"), Some("a b"));
        assert_eq!(query.first("flag"), Some(""));
        assert_eq!(query.first("plus"), Some("c d"));
        assert_eq!(QueryParams::parse(None), QueryParams::default());
    }

    #[test]
    fn test_context_from_parts() {
        let (parts, _) = Request::builder()
            .method("POST")
            .uri("http://localhost/headers?key=X-Test")
            .header("X-Test", "hello")
            .body(())
            .unwrap()
            .into_parts();

        let ctx = RequestContext::from_parts(&parts);
        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.path, "/headers");
        assert_eq!(ctx.query.first("key"), Some("X-Test"));
        assert_eq!(ctx.headers.get("x-test").unwrap(), "hello");

        let (parts, _) = Request::builder()
            .uri("/a%20b?x=1")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(RequestContext::from_parts(&parts).path, "/a b");
    }

    #[test]
    fn test_request_id_format() {
        let a = RequestId::new().to_string();
        let b = RequestId::new().to_string();
        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
        let parsed = Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("120"), Some(120));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int(" 1"), None);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/a%20b"), "/a b");
        assert_eq!(decode_path("/caf%C3%A9"), "/café");
        assert_eq!(decode_path("/plain"), "/plain");
        assert_eq!(decode_path("/bad%zz"), "/bad%zz");
        assert_eq!(decode_path("/a+b"), "/a+b");
    }
}
