//! # hookhub-api
//!
//! HTTP layer for HookHub built on Axum.
//!
//! Serves the rendered catalog page at `/` and a read-only JSON view of the
//! same catalog under `/api`, with request logging, CORS and compression
//! middleware.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod telemetry;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
pub use telemetry::init_logging;
