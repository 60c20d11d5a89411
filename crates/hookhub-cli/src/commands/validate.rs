//! Validate a hook dataset.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use hookhub_core::error::AppError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dataset to validate instead of the configured one
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Execute the validate command
pub async fn execute(args: &ValidateArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    let catalog = match super::load_catalog(&config, args.data.as_ref()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            output::print_error(&format!("Dataset invalid: {}", e.message));
            return Err(e);
        }
    };

    if catalog.is_empty() {
        output::print_warning("Dataset is valid but contains no hooks");
        return Ok(());
    }

    output::print_success(&format!("Dataset is valid ({} hooks)", catalog.len()));
    for (category, count) in catalog.category_counts() {
        output::print_kv(category.as_str(), &count.to_string());
    }

    Ok(())
}
