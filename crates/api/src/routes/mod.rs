pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod platforms;
pub mod prompts;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update, deactivate
/// /admin/users/{id}/reset-password                 reset password
///
/// /platforms                                       list (auth), create (admin)
/// /platforms/{id}                                  update, delete (admin)
/// /platforms/{platform_id}/categories/{category_id}/prompts
///                                                  list versions, save (admin)
/// /platforms/{platform_id}/categories/{category_id}/prompts/active
///                                                  active version (admin)
///
/// /prompts/test                                    generation test (admin)
///
/// /categories                                      list (auth required)
/// /models                                          list (auth required)
///
/// /submissions                                     list, create (auth required)
/// /submissions/{id}                                get (owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user management).
        .nest("/admin", admin::router())
        // Platform CRUD plus per-key prompt versioning.
        .nest(
            "/platforms",
            platforms::router().merge(prompts::platform_prompt_router()),
        )
        // Generation test flow.
        .nest("/prompts", prompts::test_router())
        // Read-only catalogs.
        .merge(catalog::router())
        // User-scoped product submissions.
        .nest("/submissions", submissions::router())
}
