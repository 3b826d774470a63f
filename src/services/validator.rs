//! Draft 4 JSON Schema validation of coerced configuration.

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::domain::errors::{ConfigError, ConfigResult, ValidationError};
use crate::domain::models::{ConfigMap, ConfigSchema};

/// A schema compiled for repeated validation.
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    /// Compile `schema` with Draft 4 semantics.
    pub fn compile(schema: &ConfigSchema) -> ConfigResult<Self> {
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft4)
            .compile(schema.raw())
            .map_err(|e| ConfigError::InvalidSchema(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Every violation of the schema in `config`, in engine order.
    pub fn errors(&self, config: &ConfigMap) -> Vec<ValidationError> {
        let instance = Value::Object(config.clone());
        let Err(errors) = self.compiled.validate(&instance) else {
            return Vec::new();
        };
        errors
            .map(|e| ValidationError {
                path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    /// Validate `config`, returning it unchanged when valid.
    ///
    /// Each violation is logged before the full list is returned.
    pub fn validate(&self, config: ConfigMap) -> ConfigResult<ConfigMap> {
        let errors = self.errors(&config);
        if errors.is_empty() {
            return Ok(config);
        }
        for error in &errors {
            tracing::error!("{error}");
        }
        Err(ConfigError::Validation(errors))
    }
}

/// Compile `schema` and validate `config` against it in one step.
pub fn validate(schema: &ConfigSchema, config: ConfigMap) -> ConfigResult<ConfigMap> {
    SchemaValidator::compile(schema)?.validate(config)
}
