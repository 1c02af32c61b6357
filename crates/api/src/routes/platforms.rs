//! Route definitions for the `/platforms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::platforms;
use crate::state::AppState;

/// Routes mounted at `/platforms`.
///
/// The path parameter is named `platform_id` (not `id`) so these routes
/// can merge with the per-key prompt routes, which share the first path
/// segment.
///
/// ```text
/// GET    /               -> list_platforms (auth required)
/// POST   /               -> create_platform (admin only)
/// PUT    /{platform_id}  -> update_platform (admin only)
/// DELETE /{platform_id}  -> delete_platform (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(platforms::list_platforms).post(platforms::create_platform),
        )
        .route(
            "/{platform_id}",
            axum::routing::put(platforms::update_platform).delete(platforms::delete_platform),
        )
}
