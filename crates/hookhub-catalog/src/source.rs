//! Dataset sources.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use hookhub_core::AppResult;
use hookhub_core::config::CatalogConfig;
use hookhub_core::error::{AppError, ErrorKind};

/// The dataset compiled into every HookHub binary.
pub const EMBEDDED_DATASET: &str = include_str!("../data/hooks.json");

/// Where a catalog's JSON text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The bundled [`EMBEDDED_DATASET`].
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Resolve the source named by configuration.
    pub fn from_config(config: &CatalogConfig) -> Self {
        match config.source.as_deref() {
            Some(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Embedded,
        }
    }

    /// Read the raw dataset text.
    pub async fn read(&self) -> AppResult<Cow<'static, str>> {
        match self {
            Self::Embedded => Ok(Cow::Borrowed(EMBEDDED_DATASET)),
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map(Cow::Owned)
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to read dataset '{}': {e}", path.display()),
                        e,
                    )
                }),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dataset"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
