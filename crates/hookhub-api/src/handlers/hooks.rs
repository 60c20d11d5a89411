//! Read-only JSON view of the catalog.

use axum::Json;
use axum::extract::{Path, Query, State};

use hookhub_core::error::AppError;
use hookhub_entity::{Hook, HookCategory};
use hookhub_views::category_style;

use crate::dto::request::HookListQuery;
use crate::dto::response::{ApiResponse, CategoryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hooks
pub async fn list_hooks(
    State(state): State<AppState>,
    Query(query): Query<HookListQuery>,
) -> Result<Json<ApiResponse<Vec<Hook>>>, ApiError> {
    let hooks = match query.category.as_deref() {
        Some(tag) => {
            let category: HookCategory = tag.parse()?;
            state
                .catalog
                .by_category(category)
                .into_iter()
                .cloned()
                .collect()
        }
        None => state.catalog.hooks().to_vec(),
    };

    Ok(Json(ApiResponse::ok(hooks)))
}

/// GET /api/hooks/{id}
pub async fn get_hook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Hook>>, ApiError> {
    let hook = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Hook '{id}' not found")))?;

    Ok(Json(ApiResponse::ok(hook)))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<CategoryResponse>>> {
    let categories = state
        .catalog
        .category_counts()
        .into_iter()
        .map(|(category, count)| {
            let style = category_style(category);
            CategoryResponse {
                category,
                background: style.background.to_string(),
                text: style.text.to_string(),
                count,
            }
        })
        .collect();

    Json(ApiResponse::ok(categories))
}
