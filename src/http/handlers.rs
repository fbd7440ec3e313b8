//! Builtin endpoint handlers.
//!
//! Each handler turns a [`RequestContext`] into exactly one response. None of
//! them mutate shared state.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::{ComponentConfig, StaticRoute};
use crate::environment::Environment;
use crate::http::request::{parse_int, RequestContext, RequestId};
use crate::http::response::{error_response, plain_text};
use crate::upstream::UpstreamClient;

/// `/`: echo the requested path.
pub fn echo(ctx: &RequestContext) -> Response {
    format!("Hello! you've requested {}\n", ctx.path).into_response()
}

/// `/multi`: greet, optionally folding in the peer's response.
///
/// An upstream failure ends the request with the error response; nothing is
/// written after it.
pub async fn multi(component: &ComponentConfig, upstream: &UpstreamClient) -> Response {
    let mut received = None;

    if let Some(target) = component.target.as_deref() {
        tracing::debug!(target_addr = %target, "Chaining to upstream");

        match upstream.fetch(target).await {
            Ok(body) => received = Some((target, body)),
            Err(e) => {
                tracing::warn!(target_addr = %e.target(), error = %e, "Upstream call failed");
                return error_response(e.status(), &e.to_string());
            }
        }
    }

    plain_text(StatusCode::OK, greeting(&component.name, received))
}

fn greeting(name: &str, received: Option<(&str, String)>) -> String {
    let mut message = format!("Hello from {name}.\n");
    if let Some((target, body)) = received.filter(|(_, body)| !body.is_empty()) {
        message.push_str(&format!("Received message from {target}:\n\t`{body}`\n"));
    }
    message
}

/// `/cached`: fresh identifier, `Cache-Control: max-age=N` when requested.
///
/// A non-numeric `max-age` is sent as `0`.
pub fn cached(ctx: &RequestContext) -> Response {
    let body = RequestId::new().to_string();

    match ctx.query.first("max-age") {
        Some(raw) => {
            let max_age = parse_int(raw).unwrap_or(0);
            (
                [(header::CACHE_CONTROL, format!("max-age={max_age}"))],
                body,
            )
                .into_response()
        }
        None => body.into_response(),
    }
}

/// `/headers`: one header's value, or every header as `name=v1,v2` lines.
///
/// Only the first `key` parameter is honoured and only the header's first
/// value is returned for it.
pub fn headers(ctx: &RequestContext) -> Response {
    if let Some(key) = ctx.query.first("key") {
        let value = ctx
            .headers
            .get(key)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();
        return value.into_response();
    }

    render_headers(&ctx.headers).into_response()
}

fn render_headers(headers: &HeaderMap) -> String {
    headers
        .keys()
        .map(|name| {
            let values: Vec<_> = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            format!("{}={}", name, values.join(","))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `/env`: one variable's value, or every variable as `NAME=value` lines.
pub fn env(ctx: &RequestContext, source: &dyn Environment) -> Response {
    if let Some(key) = ctx.query.first("key") {
        return source.get(key).unwrap_or_default().into_response();
    }

    source
        .vars()
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
        .into_response()
}

/// `/status`: fresh identifier under the status given by `code`.
///
/// Codes outside `200..600` and unparseable values leave the status at 200.
pub fn status(ctx: &RequestContext) -> Response {
    let status = ctx
        .query
        .first("code")
        .and_then(parse_int)
        .filter(|code| (200..600).contains(code))
        .and_then(|code| u16::try_from(code).ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);

    (status, RequestId::new().to_string()).into_response()
}

/// A configured static route: the literal body, nothing else.
pub fn static_body(route: &StaticRoute) -> Response {
    route.body.clone().into_response()
}
