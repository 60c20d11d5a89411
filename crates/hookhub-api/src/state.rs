//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use hookhub_catalog::HookCatalog;
use hookhub_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything here is
/// read-only after startup, so cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The hook collection loaded at startup
    pub catalog: HookCatalog,
    /// When the server started, for the health probe
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state for a freshly loaded catalog.
    pub fn new(config: AppConfig, catalog: HookCatalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            started_at: Utc::now(),
        }
    }
}
