//! Repository for the `categories` table (read-only reference data).

use listforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

const COLUMNS: &str = "id, name, created_at";

/// Provides read operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
