//! Product submission entity model and DTOs.

use listforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product submission row from the `product_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductSubmission {
    pub id: DbId,
    pub user_id: DbId,
    pub platform_id: DbId,
    pub description: Option<String>,
    pub stl_url: Option<String>,
    pub status: String,
    /// Raw generation response once the workflow has processed the
    /// submission, if any.
    pub response: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product submission.
///
/// At least one of `description` / `stl_url` must be present; the check
/// constraint on the table backs the handler-level validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    pub user_id: DbId,
    pub platform_id: DbId,
    pub description: Option<String>,
    pub stl_url: Option<String>,
}
