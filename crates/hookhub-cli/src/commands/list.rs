//! List hooks in the catalog.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use hookhub_core::error::AppError;
use hookhub_entity::{Hook, HookCategory};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list hooks in this category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Dataset to list instead of the configured one
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// One table row
#[derive(Debug, Serialize, Tabled)]
struct HookRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&Hook> for HookRow {
    fn from(hook: &Hook) -> Self {
        Self {
            id: hook.id.clone(),
            name: hook.name.clone(),
            category: hook.category.to_string(),
            url: hook.github_url.clone(),
        }
    }
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config, args.data.as_ref()).await?;

    let hooks: Vec<&Hook> = match args.category.as_deref() {
        Some(tag) => {
            let category: HookCategory = tag.parse()?;
            catalog.by_category(category)
        }
        None => catalog.hooks().iter().collect(),
    };

    match format {
        OutputFormat::Table => {
            let rows: Vec<HookRow> = hooks.into_iter().map(HookRow::from).collect();
            output::print_list(&rows, format)?;
        }
        // JSON mirrors the dataset shape rather than the table columns.
        OutputFormat::Json => output::print_item(&hooks, format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture;
    use hookhub_core::error::ErrorKind;

    fn args(category: Option<&str>) -> ListArgs {
        ListArgs {
            category: category.map(str::to_string),
            data: Some(fixture("hooks.json")),
        }
    }

    #[tokio::test]
    async fn test_list_all_and_filtered() {
        assert!(execute(&args(None), None, OutputFormat::Table).await.is_ok());
        assert!(execute(&args(Some("git")), None, OutputFormat::Json).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_category_is_validation_error() {
        let err = execute(&args(Some("bogus")), None, OutputFormat::Table)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_row_from_hook() {
        let hook = Hook {
            id: "1".to_string(),
            name: "Auto-Format".to_string(),
            category: HookCategory::Formatting,
            description: "Formats code on save.".to_string(),
            github_url: "https://github.com/x/y".to_string(),
        };

        let row = HookRow::from(&hook);
        assert_eq!(row.category, "formatting");
        assert_eq!(row.url, "https://github.com/x/y");
    }
}
