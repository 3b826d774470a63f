//! Schematized Config - schema-enforced configuration loading
//!
//! Validates environment variables and dotenv files against a JSON Schema,
//! coercing primitive string values to their declared types and filling in
//! declared defaults.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Schema model, errors, and port traits
//! - **Service Layer** (`services`): The extract → coerce → validate pipeline
//! - **Adapters** (`adapters`): Process/in-memory environment and storage
//! - **Infrastructure Layer** (`infrastructure`): Settings, logging, dotenv
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use schematized_config::{load_validated_config, ConfigMap};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "properties": {
//!         "PORT": {"type": "integer", "default": 8080},
//!         "DEBUG": {"type": "boolean"}
//!     }
//! });
//! let raw: ConfigMap = json!({"DEBUG": "yes", "EXTRA": "ignored"})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let config = load_validated_config(schema, &raw).unwrap();
//! assert_eq!(config["PORT"], 8080);
//! assert_eq!(config["DEBUG"], true);
//! assert!(!config.contains_key("EXTRA"));
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{MemoryEnv, MemoryStorage, OsStorage, ProcessEnv};
pub use domain::models::{
    ConfigMap, ConfigSchema, PropertySchema, PropertyType, SchemaSource, Settings,
    DEFAULT_SCHEMA_ENV_VAR,
};
pub use domain::ports::{EnvStore, Storage};
pub use domain::{ConfigError, ConfigResult, ValidationError};
pub use infrastructure::config::{SettingsError, SettingsLoader};
pub use services::{
    coerce, extract, load_dotenv, load_validated_config, load_validated_environment,
    ConfigValidator, SchemaLoader, SourceMerger, ValidatorContext,
};
