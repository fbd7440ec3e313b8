//! Configuration loading from environment variables.

use thiserror::Error;

use crate::config::schema::{ProbeConfig, StaticRoute};

pub const COMPONENT_NAME: &str = "COMPONENT_NAME";
pub const COMPONENT_TARGET: &str = "COMPONENT_TARGET";
pub const PORT: &str = "PORT";
pub const BIND_HOST: &str = "BIND_HOST";
pub const ROUTES: &str = "ROUTES";
pub const UPSTREAM_TIMEOUT_MS: &str = "UPSTREAM_TIMEOUT_MS";

/// Error type for configuration loading. Every variant is fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),

    #[error("malformed ROUTES entry {0:?}: expected path=body")]
    MalformedRoute(String),

    #[error("ROUTES entry {0:?} has an empty path")]
    EmptyRoutePath(String),

    #[error("invalid UPSTREAM_TIMEOUT_MS {0:?}: expected milliseconds as an integer")]
    InvalidTimeout(String),
}

/// Load configuration from the live process environment.
pub fn load_from_env() -> Result<ProbeConfig, ConfigError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary key lookup.
///
/// Unset and empty variables are treated alike.
pub fn load_from_lookup<F>(lookup: F) -> Result<ProbeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let mut config = ProbeConfig::default();

    if let Some(port) = get(PORT) {
        config.listener.port = match port.parse::<u16>() {
            Ok(p) if p > 0 => p,
            _ => return Err(ConfigError::InvalidPort(port)),
        };
    }
    if let Some(host) = get(BIND_HOST) {
        config.listener.host = host;
    }

    config.component.name = get(COMPONENT_NAME).unwrap_or_default();
    config.component.target = get(COMPONENT_TARGET);

    if let Some(raw) = get(ROUTES) {
        config.routes = parse_routes(&raw)?;
    }

    if let Some(timeout) = get(UPSTREAM_TIMEOUT_MS) {
        let ms = timeout
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout(timeout.clone()))?;
        // 0 keeps the unbounded behaviour
        config.upstream.timeout_ms = (ms > 0).then_some(ms);
    }

    Ok(config)
}

/// Parse a comma-separated list of `path=body` pairs.
///
/// Empty entries are skipped. Each entry is split at its first `=`, so bodies
/// may themselves contain `=`. Paths are made absolute.
pub fn parse_routes(raw: &str) -> Result<Vec<StaticRoute>, ConfigError> {
    raw.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (path, body) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedRoute(entry.to_string()))?;
            let path = path.strip_prefix('/').unwrap_or(path);
            if path.is_empty() {
                return Err(ConfigError::EmptyRoutePath(entry.to_string()));
            }
            Ok(StaticRoute::new(format!("/{path}"), body))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load_from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listener.port, 80);
        assert_eq!(config.component.name, "");
        assert!(config.component.target.is_none());
        assert!(config.upstream.timeout_ms.is_none());
    }

    #[test]
    fn test_full_environment() {
        let config = load_from_lookup(lookup(&[
            (PORT, "8080"),
            (COMPONENT_NAME, "svc-a"),
            (COMPONENT_TARGET, "svc-b:8080"),
            (ROUTES, "foo=bar,baz=qux"),
            (UPSTREAM_TIMEOUT_MS, "250"),
        ]))
        .unwrap();

        assert_eq!(config.listener.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.component.name, "svc-a");
        assert_eq!(config.component.target.as_deref(), Some("svc-b:8080"));
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.upstream.timeout_ms, Some(250));
    }

    #[test]
    fn test_empty_target_disables_chaining() {
        let config = load_from_lookup(lookup(&[(COMPONENT_TARGET, "")])).unwrap();
        assert!(config.component.target.is_none());
    }

    #[test]
    fn test_zero_timeout_means_unbounded() {
        let config = load_from_lookup(lookup(&[(UPSTREAM_TIMEOUT_MS, "0")])).unwrap();
        assert!(config.upstream.timeout_ms.is_none());
    }

    #[test]
    fn test_invalid_values_are_fatal() {
        assert_eq!(
            load_from_lookup(lookup(&[(PORT, "http")])).unwrap_err(),
            ConfigError::InvalidPort("http".into())
        );
        assert_eq!(
            load_from_lookup(lookup(&[(PORT, "0")])).unwrap_err(),
            ConfigError::InvalidPort("0".into())
        );
        assert_eq!(
            load_from_lookup(lookup(&[(UPSTREAM_TIMEOUT_MS, "soon")])).unwrap_err(),
            ConfigError::InvalidTimeout("soon".into())
        );
    }

    #[test]
    fn test_parse_routes() {
        let routes = parse_routes("foo=bar,,baz=qux").unwrap();
        assert_eq!(
            routes,
            vec![StaticRoute::new("/foo", "bar"), StaticRoute::new("/baz", "qux")]
        );
    }

    #[test]
    fn test_parse_routes_splits_on_first_equals() {
        let routes = parse_routes("q=a=b,/already=abs,empty=").unwrap();
        assert_eq!(routes[0], StaticRoute::new("/q", "a=b"));
        assert_eq!(routes[1], StaticRoute::new("/already", "abs"));
        assert_eq!(routes[2], StaticRoute::new("/empty", ""));
    }

    #[test]
    fn test_parse_routes_rejects_malformed_entries() {
        assert_eq!(
            parse_routes("foo=bar,oops").unwrap_err(),
            ConfigError::MalformedRoute("oops".into())
        );
        assert_eq!(
            parse_routes("=body").unwrap_err(),
            ConfigError::EmptyRoutePath("=body".into())
        );
    }
}
