//! Route definitions for the read-only catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Top-level catalog routes.
///
/// ```text
/// GET /categories -> list_categories (auth required)
/// GET /models     -> list_models (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/models", get(catalog::list_models))
}
