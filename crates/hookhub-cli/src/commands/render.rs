//! Render the catalog page to disk.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use hookhub_core::error::AppError;
use hookhub_views::render_catalog_page;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Output HTML file (defaults to `render.output_path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dataset to render instead of the configured one
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Execute the render command
pub async fn execute(args: &RenderArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config, args.data.as_ref()).await?;

    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.render.output_path));

    let html = render_catalog_page(&catalog, &config.render);

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AppError::storage(format!("Failed to create '{}': {}", parent.display(), e))
        })?;
    }

    tokio::fs::write(&out_path, html).await.map_err(|e| {
        AppError::storage(format!("Failed to write '{}': {}", out_path.display(), e))
    })?;

    tracing::info!(path = %out_path.display(), hooks = catalog.len(), "Catalog page written");
    output::print_success(&format!(
        "Rendered {} hooks to '{}'",
        catalog.len(),
        out_path.display()
    ));

    Ok(())
}
