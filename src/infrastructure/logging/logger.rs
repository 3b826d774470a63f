use super::config::{LogConfig, LogFormat};
use anyhow::Result;
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Install the global tracing subscriber
///
/// Logs are written to stderr so that command output on stdout stays
/// machine-readable. `RUST_LOG` directives take precedence over the
/// configured level.
///
/// # Errors
/// Returns an error if the level is invalid or a subscriber is already set
pub fn init(config: &LogConfig) -> Result<()> {
    let default_level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    match config.format {
        LogFormat::Json => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(stderr_layer).try_init()?;
        }
        LogFormat::Pretty => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(stderr_layer).try_init()?;
        }
    }

    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        "logger initialized"
    );

    Ok(())
}

/// Parse log level string to a level filter
fn parse_log_level(level: &str) -> Result<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::OFF),
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
