//! Start the HookHub server.

use std::path::PathBuf;

use clap::Args;

use hookhub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Dataset to serve instead of the configured one
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    hookhub_api::init_logging(&config.logging)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let catalog = super::load_catalog(&config, args.data.as_ref()).await?;

    println!("Starting HookHub server...");
    println!("  Host:  {}", config.server.host);
    println!("  Port:  {}", config.server.port);
    println!("  Hooks: {}", catalog.len());

    hookhub_api::run_server(config, catalog).await
}
