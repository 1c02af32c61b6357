//! Handlers for the `/submissions` resource.
//!
//! Product submissions are scoped to their owning user: every read filters
//! on the authenticated user's id, so one user can never see another's
//! listings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use listforge_core::error::CoreError;
use listforge_core::types::DbId;
use listforge_db::models::submission::CreateSubmission;
use listforge_db::repositories::{PlatformRepo, SubmissionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /submissions`.
#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub platform_id: DbId,
    pub description: Option<String>,
    pub stl_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/submissions
///
/// Submit a product for listing optimization. At least one of
/// `description` / `stl_url` must be present.
pub async fn create_submission(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateSubmissionRequest>,
) -> AppResult<impl IntoResponse> {
    // Normalize blank strings to NULL before the at-least-one check.
    let description = input
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    let stl_url = input
        .stl_url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());

    if description.is_none() && stl_url.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Provide a description or an STL file URL".into(),
        )));
    }

    if PlatformRepo::find_by_id(&state.pool, input.platform_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id: input.platform_id,
        }));
    }

    let submission = SubmissionRepo::create(
        &state.pool,
        &CreateSubmission {
            user_id: user.user_id,
            platform_id: input.platform_id,
            description,
            stl_url,
        },
    )
    .await?;

    tracing::info!(
        submission_id = submission.id,
        platform_id = submission.platform_id,
        user_id = user.user_id,
        "Product submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/submissions
///
/// List the authenticated user's submissions, newest first.
pub async fn list_submissions(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let submissions = SubmissionRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/submissions/{id}
///
/// Get one of the authenticated user's submissions. Another user's
/// submission answers 404, indistinguishable from a missing one.
pub async fn get_submission(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::find_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProductSubmission",
            id,
        }))?;

    Ok(Json(DataResponse { data: submission }))
}
