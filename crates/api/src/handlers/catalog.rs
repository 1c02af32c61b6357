//! Handlers for the read-only catalogs: categories and generation models.
//!
//! Both are seeded reference data; the API exposes no mutation path.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use listforge_db::repositories::{CategoryRepo, ModelRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// List the artifact categories (e.g. Description, Keywords).
pub async fn list_categories(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/models
///
/// List the generation models prompts can target.
pub async fn list_models(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let models = ModelRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: models }))
}
