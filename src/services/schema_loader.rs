//! Schema resolution from inline documents, storage, or the fallback variable.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{ConfigSchema, SchemaSource, DEFAULT_SCHEMA_ENV_VAR};
use crate::domain::ports::{EnvStore, Storage};

/// Loads schema documents through a [`Storage`].
///
/// Nothing is cached: every call re-reads the storage.
#[derive(Clone)]
pub struct SchemaLoader {
    storage: Arc<dyn Storage>,
    env_var: String,
}

impl SchemaLoader {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            env_var: DEFAULT_SCHEMA_ENV_VAR.to_string(),
        }
    }

    /// Use a different fallback variable name.
    #[must_use]
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Load a schema document.
    ///
    /// Inline documents are returned unchanged; locations are read from
    /// storage and parsed as YAML when they end in `.yaml`/`.yml`, JSON
    /// otherwise.
    pub fn load(&self, source: &SchemaSource) -> ConfigResult<Value> {
        match source {
            SchemaSource::Inline(value) => {
                if value.is_object() {
                    Ok(value.clone())
                } else {
                    Err(ConfigError::SchemaLoad {
                        location: "<inline>".to_string(),
                        reason: "schema must be a JSON object".to_string(),
                    })
                }
            }
            SchemaSource::Location(location) => self.load_location(location),
        }
    }

    /// Load the schema named by the fallback variable, if it is set.
    pub fn resolve_default(&self, env: &dyn EnvStore) -> ConfigResult<Option<Value>> {
        let Some(location) = env.get(&self.env_var) else {
            return Ok(None);
        };
        tracing::debug!(env_var = %self.env_var, %location, "using schema from environment");
        self.load_location(&location).map(Some)
    }

    /// Resolve and decode the schema for a validation session.
    ///
    /// An explicit source wins; otherwise the fallback variable is consulted.
    pub fn resolve(
        &self,
        explicit: Option<&SchemaSource>,
        env: &dyn EnvStore,
    ) -> ConfigResult<ConfigSchema> {
        let raw = match explicit {
            Some(source) => self.load(source)?,
            None => self
                .resolve_default(env)?
                .ok_or_else(|| ConfigError::SchemaNotFound {
                    env_var: self.env_var.clone(),
                })?,
        };
        ConfigSchema::from_value(raw)
    }

    fn load_location(&self, location: &str) -> ConfigResult<Value> {
        tracing::debug!(%location, "loading schema");
        let load_error = |reason: String| ConfigError::SchemaLoad {
            location: location.to_string(),
            reason,
        };

        let bytes = self
            .storage
            .read(location)
            .map_err(|e| load_error(e.to_string()))?;

        let value: Value = if is_yaml(location) {
            serde_yaml::from_slice(&bytes).map_err(|e| load_error(e.to_string()))?
        } else {
            serde_json::from_slice(&bytes).map_err(|e| load_error(e.to_string()))?
        };

        if !value.is_object() {
            return Err(load_error("schema must be a JSON object".to_string()));
        }
        Ok(value)
    }
}

fn is_yaml(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.ends_with(".yaml") || lower.ends_with(".yml")
}
