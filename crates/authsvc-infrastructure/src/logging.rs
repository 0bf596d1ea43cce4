//! Structured logging with tracing
//!
//! Stdout output in text or JSON, with an optional daily-rolled log file.
//! `AUTHSVC_LOG` takes precedence over the configured level.

use authsvc_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new("authsvc")),
        )
    });

    // Layer types differ between text and JSON, hence the separate branches
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    };
    initialized.map_err(|e| Error::config_with_source("Failed to install log subscriber", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
