//! HookHub Server: serves the rendered hook catalog.
//!
//! Main entry point that loads configuration and the catalog, then starts
//! the HTTP server.

use hookhub_catalog::{CatalogSource, HookCatalog};
use hookhub_core::config::AppConfig;
use hookhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = hookhub_api::init_logging(&config.logging) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("HOOKHUB_CONFIG") {
        Ok(path) => AppConfig::load_file(path),
        Err(_) => {
            let env = std::env::var("HOOKHUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HookHub v{}", env!("CARGO_PKG_VERSION"));

    // A malformed dataset stops startup here; nothing is served.
    let source = CatalogSource::from_config(&config.catalog);
    let catalog = HookCatalog::load(&source).await?;

    hookhub_api::run_server(config, catalog).await
}
