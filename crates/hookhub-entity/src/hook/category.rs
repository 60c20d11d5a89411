//! Hook category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag applied to every hook.
///
/// The set is closed: a dataset record naming any other tag fails to
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookCategory {
    /// Code formatting (Prettier, Black, etc.).
    Formatting,
    /// Test execution automation.
    Testing,
    /// Git operations and workflows.
    Git,
    /// Code linting.
    Linting,
    /// General workflow automation.
    Automation,
    /// Logging and analytics.
    Logging,
    /// Notification triggers.
    Notification,
    /// Custom workflow steps.
    Workflow,
    /// Uncategorized.
    Other,
}

impl HookCategory {
    /// Every category, in display order.
    pub const ALL: [HookCategory; 9] = [
        Self::Formatting,
        Self::Testing,
        Self::Git,
        Self::Linting,
        Self::Automation,
        Self::Logging,
        Self::Notification,
        Self::Workflow,
        Self::Other,
    ];

    /// Return the category tag as it appears in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formatting => "formatting",
            Self::Testing => "testing",
            Self::Git => "git",
            Self::Linting => "linting",
            Self::Automation => "automation",
            Self::Logging => "logging",
            Self::Notification => "notification",
            Self::Workflow => "workflow",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for HookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tags match exactly, the same rule serde applies when loading a dataset.
impl FromStr for HookCategory {
    type Err = hookhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                hookhub_core::AppError::validation(format!(
                    "Invalid hook category: '{s}'. Expected one of: {}",
                    Self::ALL.map(|c| c.as_str()).join(", ")
                ))
            })
    }
}
