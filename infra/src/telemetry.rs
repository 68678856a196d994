//! Tracing subscriber initialization.

use rd_shared::config::environment::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the logging configuration
///
/// `RUST_LOG` takes precedence over the configured level. Re-initialization
/// (e.g. across tests) is a no-op.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .try_init();
}
