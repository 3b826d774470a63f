//! Precedence between dotenv values and the process environment.

use serde_json::Value;

use crate::domain::models::{ConfigMap, ConfigSchema};
use crate::domain::ports::EnvStore;

/// Merges file-sourced configuration with an [`EnvStore`].
pub struct SourceMerger<'a> {
    env: &'a dyn EnvStore,
}

impl<'a> SourceMerger<'a> {
    pub fn new(env: &'a dyn EnvStore) -> Self {
        Self { env }
    }

    /// Overlay environment values onto `file_config` for declared keys.
    ///
    /// The environment always wins for declared keys. Undeclared environment
    /// variables are not pulled in.
    pub fn merge(&self, file_config: &ConfigMap, schema: &ConfigSchema) -> ConfigMap {
        let mut merged = file_config.clone();
        for (key, _) in schema.properties() {
            let Some(env_value) = self.env.get(key) else {
                continue;
            };
            if let Some(file_value) = merged.get(key) {
                if file_value.as_str() != Some(env_value.as_str()) {
                    tracing::info!(key, "environment value overrides dotenv value");
                }
            }
            merged.insert(key.to_string(), Value::String(env_value));
        }
        merged
    }

    /// Write validated values into the environment for keys not already set.
    ///
    /// Strings are written verbatim and other scalars in their JSON text form;
    /// nulls are skipped. Returns the keys that were written.
    pub fn write_back(&self, validated: &ConfigMap) -> Vec<String> {
        let mut written = Vec::new();
        for (key, value) in validated {
            if self.env.contains(key) {
                continue;
            }
            let rendered = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            tracing::info!(key = %key, "setting environment variable from validated config");
            self.env.set(key, &rendered);
            written.push(key.clone());
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryEnv;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with INFO events written to the returned buffer.
    fn capture_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::from_value(json!({
            "properties": {
                "HOST": {"type": "string"},
                "PORT": {"type": "integer"}
            }
        }))
        .unwrap()
    }

    fn map(value: Value) -> ConfigMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_environment_wins_for_declared_keys() {
        let env = MemoryEnv::from_pairs([("HOST", "envval")]);
        let merged = SourceMerger::new(&env).merge(&map(json!({"HOST": "fileval"})), &schema());
        assert_eq!(merged["HOST"], "envval");
    }

    #[test]
    fn test_override_is_logged() {
        let env = MemoryEnv::from_pairs([("HOST", "envval")]);
        let logs = capture_logs(|| {
            SourceMerger::new(&env).merge(&map(json!({"HOST": "fileval"})), &schema());
        });
        assert!(logs.contains("HOST"), "{logs}");
        assert!(logs.contains("environment value overrides dotenv value"), "{logs}");
    }

    #[test]
    fn test_identical_values_not_logged() {
        let env = MemoryEnv::from_pairs([("HOST", "same")]);
        let logs = capture_logs(|| {
            SourceMerger::new(&env).merge(&map(json!({"HOST": "same"})), &schema());
        });
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn test_environment_fills_missing_declared_keys() {
        let env = MemoryEnv::from_pairs([("PORT", "9000")]);
        let merged = SourceMerger::new(&env).merge(&ConfigMap::new(), &schema());
        assert_eq!(merged["PORT"], "9000");
    }

    #[test]
    fn test_undeclared_environment_ignored() {
        let env = MemoryEnv::from_pairs([("PATH", "/usr/bin")]);
        let merged = SourceMerger::new(&env).merge(&map(json!({"HOST": "a"})), &schema());
        assert!(!merged.contains_key("PATH"));
        assert_eq!(merged["HOST"], "a");
    }

    #[test]
    fn test_undeclared_file_keys_kept_for_extraction() {
        let env = MemoryEnv::new();
        let merged = SourceMerger::new(&env).merge(&map(json!({"OTHER": "x"})), &schema());
        assert_eq!(merged["OTHER"], "x");
    }

    #[test]
    fn test_write_back_never_clobbers() {
        let env = MemoryEnv::from_pairs([("HOST", "already")]);
        let written = SourceMerger::new(&env)
            .write_back(&map(json!({"HOST": "validated", "PORT": 8080, "DEBUG": null})));

        assert_eq!(written, vec!["PORT".to_string()]);
        assert_eq!(env.get("HOST").as_deref(), Some("already"));
        assert_eq!(env.get("PORT").as_deref(), Some("8080"));
        assert!(!env.contains("DEBUG"));
    }
}
