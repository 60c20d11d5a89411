//! CLI command definitions and dispatch.

pub mod config;
pub mod list;
pub mod render;
pub mod serve;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use hookhub_catalog::{CatalogSource, HookCatalog};
use hookhub_core::config::AppConfig;
use hookhub_core::error::AppError;

/// HookHub: browse, render and serve the Claude Code hook catalog
#[derive(Debug, Parser)]
#[command(name = "hookhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default + HOOKHUB_ENV overlay)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the catalog page to a static HTML file
    Render(render::RenderArgs),
    /// List hooks in the catalog
    List(list::ListArgs),
    /// Validate a hook dataset
    Validate(validate::ValidateArgs),
    /// Start the HookHub server
    Serve(serve::ServeArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Commands {
    /// Whether the command sets up tracing from the loaded configuration.
    pub fn configures_logging(&self) -> bool {
        matches!(self, Self::Serve(_))
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Render(args) => render::execute(args, config_path).await,
            Commands::List(args) => list::execute(args, config_path, self.format).await,
            Commands::Validate(args) => validate::execute(args, config_path).await,
            Commands::Serve(args) => serve::execute(args, config_path).await,
            Commands::Config(args) => config::execute(args, config_path, self.format).await,
        }
    }
}

/// Helper: load configuration from an explicit file, or from the
/// `config/` directory for the current `HOOKHUB_ENV`.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::load_file(path),
        None => {
            let env = std::env::var("HOOKHUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Helper: load the catalog, preferring a `--data` override over config.
pub async fn load_catalog(
    config: &AppConfig,
    data: Option<&PathBuf>,
) -> Result<HookCatalog, AppError> {
    let source = match data {
        Some(path) => CatalogSource::File(path.clone()),
        None => CatalogSource::from_config(&config.catalog),
    };
    HookCatalog::load(&source).await
}

/// Path to a dataset under the workspace `tests/fixtures/` directory.
#[cfg(test)]
pub(crate) fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}
