//! Repository for the `product_submissions` table.

use listforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, ProductSubmission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, platform_id, description, stl_url, status, \
    response, created_at, updated_at";

/// Provides CRUD operations for product submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission with status `pending`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<ProductSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_submissions (user_id, platform_id, description, stl_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductSubmission>(&query)
            .bind(input.user_id)
            .bind(input.platform_id)
            .bind(&input.description)
            .bind(&input.stl_url)
            .fetch_one(pool)
            .await
    }

    /// List a user's submissions, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProductSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_submissions
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProductSubmission>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a submission by ID, scoped to its owning user.
    ///
    /// Returns `None` for another user's submission, so callers cannot
    /// distinguish "not mine" from "does not exist".
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<ProductSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_submissions WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ProductSubmission>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
