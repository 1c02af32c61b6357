//! Category entity model.
//!
//! Categories are seeded reference data with no mutation path.

use listforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
