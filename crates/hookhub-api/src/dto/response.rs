//! Response DTOs.

use serde::{Deserialize, Serialize};

use hookhub_entity::HookCategory;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: i64,
    /// Number of hooks in the loaded catalog.
    pub hooks: usize,
}

/// A category with its badge style and usage count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Category tag.
    pub category: HookCategory,
    /// Badge background classes.
    pub background: String,
    /// Badge text classes.
    pub text: String,
    /// Number of hooks in this category.
    pub count: usize,
}
