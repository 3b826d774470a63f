//! Infrastructure layer module
//!
//! This module contains integrations with the outside world:
//! - Settings management (figment)
//! - Logging infrastructure (tracing)
//! - Dotenv discovery and parsing (dotenvy)

pub mod config;
pub mod dotenv;
pub mod logging;
