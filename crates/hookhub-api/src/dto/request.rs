//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Query string for `GET /api/hooks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookListQuery {
    /// Only return hooks tagged with this category.
    #[serde(default)]
    pub category: Option<String>,
}
