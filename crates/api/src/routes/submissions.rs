//! Route definitions for the `/submissions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// All routes require authentication; reads are scoped to the caller.
///
/// ```text
/// GET  /      -> list_submissions
/// POST /      -> create_submission
/// GET  /{id}  -> get_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submissions::list_submissions).post(submissions::create_submission),
        )
        .route("/{id}", get(submissions::get_submission))
}
