//! Tracing subscriber setup driven by `[logging]` configuration.

use tracing_subscriber::{EnvFilter, fmt};

use hookhub_core::config::LoggingConfig;
use hookhub_core::error::AppError;

/// Build the event filter. `RUST_LOG` wins over `logging.level`.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber in the configured format (`json` or `pretty`).
///
/// Fails if a subscriber is already installed for this process.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = build_filter(config);

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    result.map_err(|e| AppError::internal(format!("Failed to install tracing subscriber: {e}")))
}
