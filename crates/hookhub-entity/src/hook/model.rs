//! Hook entity model.

use serde::{Deserialize, Serialize};

use super::category::HookCategory;

/// A single catalog entry.
///
/// Dataset records must match this shape exactly; unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hook {
    /// Unique identifier (UUID or slug).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category classification.
    pub category: HookCategory,
    /// Short description of what the hook does.
    pub description: String,
    /// Repository URL the card links to.
    #[serde(rename = "githubUrl", alias = "url")]
    pub github_url: String,
}
