//! Generation model entity.
//!
//! Identifies the downstream generation backend a prompt runs against.
//! Seeded reference data with no mutation path.

use listforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A model row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
