//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - `RUST_LOG` filter overrides
pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::init;
