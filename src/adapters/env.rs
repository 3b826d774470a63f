//! Environment store adapters.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::EnvStore;

/// Environment store backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub const fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn vars(&self) -> Vec<(String, String)> {
        // Variables that are not valid unicode cannot be declared keys.
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// In-memory environment store.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<BTreeMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `vars`.
    pub fn from_pairs<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Mutex::new(
                vars.into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_roundtrip() {
        let env = MemoryEnv::from_pairs([("HOST", "localhost")]);
        assert_eq!(env.get("HOST").as_deref(), Some("localhost"));
        assert!(!env.contains("PORT"));

        env.set("PORT", "8080");
        assert_eq!(env.get("PORT").as_deref(), Some("8080"));
        assert_eq!(env.vars().len(), 2);
    }

    #[test]
    fn test_process_env_reads_and_writes() {
        temp_env::with_var_unset("SCHEMATIZED_CONFIG_TEST_PROCESS_ENV", || {
            let env = ProcessEnv::new();
            assert!(!env.contains("SCHEMATIZED_CONFIG_TEST_PROCESS_ENV"));

            env.set("SCHEMATIZED_CONFIG_TEST_PROCESS_ENV", "set");
            assert_eq!(
                env.get("SCHEMATIZED_CONFIG_TEST_PROCESS_ENV").as_deref(),
                Some("set")
            );
            assert!(env
                .vars()
                .iter()
                .any(|(key, _)| key == "SCHEMATIZED_CONFIG_TEST_PROCESS_ENV"));
        });
    }
}
