//! Settings management infrastructure
//!
//! Hierarchical settings using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Settings validation

pub mod loader;

pub use loader::{SettingsError, SettingsLoader, SETTINGS_ENV_PREFIX, SETTINGS_FILE};
