//! Handlers for the `/platforms` resource.
//!
//! Reads are open to any authenticated user (the submission form needs the
//! platform list); mutations require the `admin` role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use listforge_core::error::CoreError;
use listforge_core::types::DbId;
use listforge_db::models::platform::{CreatePlatform, UpdatePlatform};
use listforge_db::repositories::PlatformRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for creating or renaming a platform.
#[derive(Debug, Deserialize)]
pub struct PlatformRequest {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/platforms
///
/// List all platforms.
pub async fn list_platforms(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let platforms = PlatformRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: platforms }))
}

/// POST /api/v1/platforms
///
/// Create a new platform. A duplicate name surfaces as 409.
pub async fn create_platform(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<PlatformRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Platform name must not be empty".into(),
        )));
    }

    let platform = PlatformRepo::create(
        &state.pool,
        &CreatePlatform {
            name: name.to_string(),
        },
    )
    .await?;

    tracing::info!(
        platform_id = platform.id,
        name = %platform.name,
        user_id = admin.user_id,
        "Platform created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: platform })))
}

/// PUT /api/v1/platforms/{id}
///
/// Rename a platform.
pub async fn update_platform(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<PlatformRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Platform name must not be empty".into(),
        )));
    }

    let platform = PlatformRepo::update(
        &state.pool,
        id,
        &UpdatePlatform {
            name: name.to_string(),
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Platform",
        id,
    }))?;

    Ok(Json(DataResponse { data: platform }))
}

/// DELETE /api/v1/platforms/{id}
///
/// Delete a platform. A platform still referenced by prompts or
/// submissions surfaces as 409. Returns 204 No Content.
pub async fn delete_platform(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PlatformRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(platform_id = id, user_id = admin.user_id, "Platform deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))
    }
}
