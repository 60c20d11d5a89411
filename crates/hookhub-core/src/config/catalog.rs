//! Hook dataset configuration.

use serde::{Deserialize, Serialize};

/// Where the hook catalog is read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON dataset. When unset, the dataset bundled into the
    /// binary is used.
    #[serde(default)]
    pub source: Option<String>,
}
