//! Catalog page handler.

use axum::extract::State;
use axum::response::Html;

use hookhub_views::render_catalog_page;

use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_catalog_page(&state.catalog, &state.config.render))
}
