//! Handlers for prompt versioning and the generation test flow.
//!
//! Provides endpoints for reading the active prompt of a
//! (platform, category) key, browsing its version history, saving a new
//! version, and running the active prompt against a sample description via
//! the generation webhook.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use listforge_core::error::CoreError;
use listforge_core::paging::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use listforge_core::prompts;
use listforge_core::types::DbId;
use listforge_db::models::prompt::PromptDraft;
use listforge_db::repositories::{CategoryRepo, ModelRepo, PlatformRepo, PromptRepo};
use listforge_webhook::{new_session_id, GenerationRequest};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Pagination parameters for prompt version listings.
#[derive(Debug, Deserialize)]
pub struct VersionListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// API request / response types
// ---------------------------------------------------------------------------

/// Request body for saving a new prompt version.
#[derive(Debug, Deserialize)]
pub struct SavePromptRequest {
    pub prompt_text: String,
    pub temperature: f64,
    pub max_tokens: i32,
    pub model_id: DbId,
}

/// Request body for `POST /prompts/test`.
#[derive(Debug, Deserialize)]
pub struct TestPromptRequest {
    pub platform_id: DbId,
    pub category_id: DbId,
    pub product_description: String,
}

/// Generated text relayed from the webhook.
#[derive(Debug, Serialize)]
pub struct TestPromptResult {
    pub output: String,
    pub session_id: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that both halves of a (platform, category) key exist.
async fn ensure_key_exists(
    pool: &sqlx::PgPool,
    platform_id: DbId,
    category_id: DbId,
) -> AppResult<()> {
    if PlatformRepo::find_by_id(pool, platform_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id: platform_id,
        }));
    }
    if CategoryRepo::find_by_id(pool, category_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /platforms/{platform_id}/categories/{category_id}/prompts
// ---------------------------------------------------------------------------

/// List the version history for a (platform, category) key, newest first.
///
/// An empty list is a valid answer for a key that has never been saved.
pub async fn list_versions(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((platform_id, category_id)): Path<(DbId, DbId)>,
    Query(params): Query<VersionListParams>,
) -> AppResult<impl IntoResponse> {
    ensure_key_exists(&state.pool, platform_id, category_id).await?;

    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let versions =
        PromptRepo::list_versions(&state.pool, platform_id, category_id, limit, offset).await?;

    tracing::debug!(
        count = versions.len(),
        platform_id,
        category_id,
        "Listed prompt versions"
    );

    Ok(Json(DataResponse { data: versions }))
}

// ---------------------------------------------------------------------------
// GET /platforms/{platform_id}/categories/{category_id}/prompts/active
// ---------------------------------------------------------------------------

/// Get the single active prompt version for a (platform, category) key.
///
/// A key with no saved versions answers 404 so callers surface "no active
/// prompt configured" instead of silently falling back to a default.
pub async fn get_active(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((platform_id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    ensure_key_exists(&state.pool, platform_id, category_id).await?;

    let prompt = PromptRepo::get_active(&state.pool, platform_id, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NoActivePrompt {
            platform_id,
            category_id,
        }))?;

    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// POST /platforms/{platform_id}/categories/{category_id}/prompts
// ---------------------------------------------------------------------------

/// Save a new prompt version for a (platform, category) key.
///
/// Validates the draft, mints the next version number, deactivates the
/// prior versions, and inserts the new row as the active one. Switching
/// back to an old version is done by re-submitting its field values here.
pub async fn save_prompt(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path((platform_id, category_id)): Path<(DbId, DbId)>,
    Json(body): Json<SavePromptRequest>,
) -> AppResult<impl IntoResponse> {
    // Fail fast: nothing is written for an invalid draft.
    prompts::validate_template(&body.prompt_text)?;
    prompts::validate_temperature(body.temperature)?;
    prompts::validate_max_tokens(body.max_tokens)?;

    ensure_key_exists(&state.pool, platform_id, category_id).await?;
    if ModelRepo::find_by_id(&state.pool, body.model_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Model",
            id: body.model_id,
        }));
    }

    let draft = PromptDraft {
        prompt_text: body.prompt_text,
        temperature: body.temperature,
        max_tokens: body.max_tokens,
        model_id: body.model_id,
    };

    let prompt = PromptRepo::save(&state.pool, platform_id, category_id, &draft).await?;

    tracing::info!(
        prompt_id = prompt.id,
        platform_id,
        category_id,
        version = prompt.version,
        user_id = admin.user_id,
        "Prompt version saved"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: prompt })))
}

// ---------------------------------------------------------------------------
// POST /prompts/test
// ---------------------------------------------------------------------------

/// Run the active prompt for a key against a sample product description.
///
/// Resolves the active version, dispatches `{ prompt_id,
/// product_description, session_id }` to the generation webhook, and
/// relays the generated output. The webhook call is a single bounded,
/// non-idempotent request; failures surface as 502.
pub async fn test_prompt(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(body): Json<TestPromptRequest>,
) -> AppResult<impl IntoResponse> {
    let description = body.product_description.trim();
    if description.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Product description must not be empty".into(),
        )));
    }

    ensure_key_exists(&state.pool, body.platform_id, body.category_id).await?;

    let prompt = PromptRepo::get_active(&state.pool, body.platform_id, body.category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NoActivePrompt {
            platform_id: body.platform_id,
            category_id: body.category_id,
        }))?;

    let session_id = new_session_id();
    let request = GenerationRequest {
        prompt_id: prompt.id,
        product_description: description.to_string(),
        session_id: session_id.clone(),
    };

    let output = state.generation.generate(&request).await?;

    tracing::info!(
        prompt_id = prompt.id,
        session_id = %session_id,
        user_id = admin.user_id,
        "Prompt test completed"
    );

    Ok(Json(DataResponse {
        data: TestPromptResult { output, session_id },
    }))
}
