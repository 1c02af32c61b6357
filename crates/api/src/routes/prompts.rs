//! Route definitions for prompt versioning and the generation test flow.
//!
//! ```text
//! PER-KEY PROMPT VERSIONS (merged into /platforms):
//! GET    /{platform_id}/categories/{category_id}/prompts          list_versions
//! POST   /{platform_id}/categories/{category_id}/prompts          save_prompt
//! GET    /{platform_id}/categories/{category_id}/prompts/active   get_active
//!
//! GENERATION TEST (mounted at /prompts):
//! POST   /test                                                    test_prompt
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Per-key prompt version routes -- merged into `/platforms`.
pub fn platform_prompt_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{platform_id}/categories/{category_id}/prompts",
            get(prompts::list_versions).post(prompts::save_prompt),
        )
        .route(
            "/{platform_id}/categories/{category_id}/prompts/active",
            get(prompts::get_active),
        )
}

/// Generation test routes -- mounted at `/prompts`.
pub fn test_router() -> Router<AppState> {
    Router::new().route("/test", post(prompts::test_prompt))
}
