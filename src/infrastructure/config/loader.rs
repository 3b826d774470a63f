use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Settings;

/// Project settings file read by [`SettingsLoader::load`]
pub const SETTINGS_FILE: &str = ".schematized-config.yaml";

/// Prefix for settings environment variables
pub const SETTINGS_ENV_PREFIX: &str = "SCHEMATIZED_CONFIG_";

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: off, trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Schema environment variable name cannot be empty")]
    EmptySchemaEnvVar,

    #[error("Storage root cannot be empty")]
    EmptyStorageRoot,
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .schematized-config.yaml in the working directory (optional)
    /// 3. Environment variables (SCHEMATIZED_CONFIG_* prefix, highest priority)
    pub fn load() -> Result<Settings> {
        Self::load_from(Figment::new().merge(Yaml::file(SETTINGS_FILE)))
    }

    /// Load settings from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        Self::load_from(Figment::new().merge(Yaml::file(path.as_ref())))
            .with_context(|| format!("Failed to load settings from {}", path.as_ref().display()))
    }

    fn load_from(files: Figment) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(files)
            .merge(Env::prefixed(SETTINGS_ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        if settings.schema_env_var.trim().is_empty() {
            return Err(SettingsError::EmptySchemaEnvVar);
        }

        if settings.storage_root.as_os_str().is_empty() {
            return Err(SettingsError::EmptyStorageRoot);
        }

        let valid_log_levels = ["off", "trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&settings.logging.format.as_str()) {
            return Err(SettingsError::InvalidLogFormat(settings.logging.format.clone()));
        }

        Ok(())
    }
}
