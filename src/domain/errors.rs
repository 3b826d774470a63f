//! Domain errors for the schematized configuration pipeline.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single schema violation found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// JSON pointer to the offending value (`/PORT`); empty for the root.
    pub path: String,
    /// JSON pointer to the schema keyword that failed (`/properties/PORT/type`).
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Path rendered for reports, with the document root spelled out.
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.display_path(), self.message)
    }
}

/// Errors raised while resolving a schema or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load JSON schema from {location}: {reason}")]
    SchemaLoad { location: String, reason: String },

    #[error("invalid JSON schema: {0}")]
    InvalidSchema(String),

    #[error("did not receive or find a JSON schema (set {env_var} to a schema path)")]
    SchemaNotFound { env_var: String },

    #[error("failed to load dotenv file {path}: {reason}")]
    DotenvLoad { path: String, reason: String },

    #[error("config failed to validate against JSON schema")]
    Validation(Vec<ValidationError>),
}

impl ConfigError {
    /// Every violation carried by a validation failure; empty for other errors.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_tab_separator() {
        let error = ValidationError {
            path: "/PORT".to_string(),
            schema_path: "/properties/PORT/type".to_string(),
            message: "\"abc\" is not of type \"integer\"".to_string(),
        };
        assert_eq!(error.to_string(), "/PORT\t\"abc\" is not of type \"integer\"");
    }

    #[test]
    fn test_root_path_is_spelled_out() {
        let error = ValidationError {
            path: String::new(),
            schema_path: "/required".to_string(),
            message: "\"PORT\" is a required property".to_string(),
        };
        assert_eq!(error.display_path(), "<root>");
    }

    #[test]
    fn test_validation_errors_accessor() {
        let err = ConfigError::SchemaNotFound {
            env_var: "CONFIG_VALIDATOR_JSON_SCHEMA".to_string(),
        };
        assert!(err.validation_errors().is_empty());

        let err = ConfigError::Validation(vec![ValidationError {
            path: "/A".to_string(),
            schema_path: "/properties/A/type".to_string(),
            message: "bad".to_string(),
        }]);
        assert_eq!(err.validation_errors().len(), 1);
    }
}
