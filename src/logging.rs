//! Logging setup for the generator binary.

use color_eyre::eyre::Result;
use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Configuration for the logging system.
pub struct LogConfig {
    pub log_level: Level,
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

/// Initialize the logging system with the given configuration.
///
/// `RUST_LOG` overrides the configured level when set. Output goes to
/// stdout only; a one-shot generator keeps no log files.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("readme_gen={}", config.log_level)));
    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_filter(env_filter);
        tracing_subscriber::registry()
            .with(json_layer)
            .with(ErrorLayer::default())
            .init();
    } else {
        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(false)
            .with_filter(env_filter);
        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(ErrorLayer::default())
            .init();
    }
    Ok(())
}

/// Parse a log level from its CLI spelling, defaulting to info.
#[must_use]
pub fn parse_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}
