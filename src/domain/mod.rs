//! Domain layer for schematized configuration
//!
//! This module contains the schema model, pipeline errors, and the port
//! traits through which the pipeline reaches storage and the environment.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult, ValidationError};
