//! Route definitions for the HookHub HTTP surface.
//!
//! The rendered page lives at `/`; the JSON catalog is mounted under
//! `/api`. The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(hook_routes())
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::page::home))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Catalog endpoints
fn hook_routes() -> Router<AppState> {
    Router::new()
        .route("/hooks", get(handlers::hooks::list_hooks))
        .route("/hooks/{id}", get(handlers::hooks::get_hook))
        .route("/categories", get(handlers::hooks::list_categories))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
