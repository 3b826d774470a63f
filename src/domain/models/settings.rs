use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the fallback schema location.
pub const DEFAULT_SCHEMA_ENV_VAR: &str = "CONFIG_VALIDATOR_JSON_SCHEMA";

/// Settings for the validator tool itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Environment variable consulted when no schema is given explicitly
    #[serde(default = "default_schema_env_var")]
    pub schema_env_var: String,

    /// Directory that relative schema and dotenv paths resolve against
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_schema_env_var() -> String {
    DEFAULT_SCHEMA_ENV_VAR.to_string()
}

fn default_storage_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_env_var: default_schema_env_var(),
            storage_root: default_storage_root(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingSettings {
    /// Log level: off, trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
