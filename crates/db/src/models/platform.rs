//! Marketplace platform entity model and DTOs.

use listforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A platform row from the `platforms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Platform {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new platform.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlatform {
    pub name: String,
}

/// DTO for renaming an existing platform.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlatform {
    pub name: String,
}
