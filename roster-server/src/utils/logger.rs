//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments. Application logs rotate daily when a log
//! directory is configured.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console-only logging (development default)
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    init_logger_with_file(level, false, None)
}

/// Initialize the logging system with optional daily rotating file logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production)
/// * `log_dir` - Optional directory for file logging
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "app.log");
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(EnvFilter::new(level.to_string())),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if json_format {
        registry
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }

    Ok(())
}
