//! Repository for the `platforms` table.

use listforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::platform::{CreatePlatform, Platform, UpdatePlatform};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for marketplace platforms.
pub struct PlatformRepo;

impl PlatformRepo {
    /// Insert a new platform, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlatform) -> Result<Platform, sqlx::Error> {
        let query = format!(
            "INSERT INTO platforms (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a platform by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE id = $1");
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all platforms ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms ORDER BY id ASC");
        sqlx::query_as::<_, Platform>(&query).fetch_all(pool).await
    }

    /// Rename a platform. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlatform,
    ) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!(
            "UPDATE platforms SET name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a platform by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if prompts or submissions still
    /// reference the platform; callers surface that as a conflict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
