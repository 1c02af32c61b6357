//! Repository for the `models` table (read-only reference data).

use listforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::model::Model;

const COLUMNS: &str = "id, name, created_at";

/// Provides read operations for generation models.
pub struct ModelRepo;

impl ModelRepo {
    /// Find a model by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all models ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models ORDER BY id ASC");
        sqlx::query_as::<_, Model>(&query).fetch_all(pool).await
    }
}
