//! Read-only access to key/value environment state.
//!
//! Handlers receive an `Environment` instead of calling `std::env` directly so
//! the `/env` endpoint can be exercised against a fixed snapshot.

use std::collections::BTreeMap;

/// Source of environment variables.
pub trait Environment: Send + Sync + std::fmt::Debug {
    /// Value of `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Every variable as `(name, value)` pairs. Order is unspecified.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The live process environment, read on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        // vars_os avoids the panic std::env::vars raises on non-UTF-8 entries
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// A fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Environment for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("COMPONENT_NAME", "svc-a");
        assert_eq!(env.get("COMPONENT_NAME").as_deref(), Some("svc-a"));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        let mut vars = env.vars();
        vars.sort();
        assert_eq!(
            vars,
            vec![("A".to_string(), "1".to_string()), ("B".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_process_env_sees_path() {
        // PATH is present in any realistic test environment
        let env = ProcessEnv;
        let from_vars = env.vars().into_iter().find(|(k, _)| k == "PATH");
        assert_eq!(from_vars.map(|(_, v)| v), env.get("PATH"));
    }
}
