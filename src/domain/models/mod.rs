pub mod schema;
pub mod settings;

pub use schema::{ConfigMap, ConfigSchema, PropertySchema, PropertyType, SchemaSource};
pub use settings::{LoggingSettings, Settings, DEFAULT_SCHEMA_ENV_VAR};
