//! Repository for the `prompts` table -- the prompt version store.
//!
//! Saving is append-only: each save mints a new row with the next version
//! number and deactivates every prior row for the (platform, category) key
//! inside one transaction, so a crash mid-save can never leave two active
//! rows. The version number is re-read inside that same transaction; if two
//! saves race, the loser trips `uq_prompts_platform_category_version` and
//! the whole transaction is retried with a fresh version.

use listforge_core::prompts::next_version;
use listforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{Prompt, PromptDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, platform_id, category_id, version, prompt_text, \
    temperature, max_tokens, model_id, is_active, created_at";

/// Attempts before a persistent version conflict is surfaced to the caller.
const SAVE_MAX_ATTEMPTS: u32 = 3;

/// Provides operations for the prompt version store.
pub struct PromptRepo;

impl PromptRepo {
    /// Get the single active prompt version for a (platform, category) key,
    /// or `None` if the key has never been saved.
    pub async fn get_active(
        pool: &PgPool,
        platform_id: DbId,
        category_id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE platform_id = $1 AND category_id = $2 AND is_active"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(platform_id)
            .bind(category_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a prompt version by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List prompt versions for a (platform, category) key with pagination,
    /// newest first. Empty for a key that has never been saved.
    pub async fn list_versions(
        pool: &PgPool,
        platform_id: DbId,
        category_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE platform_id = $1 AND category_id = $2
             ORDER BY version DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(platform_id)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Save a new prompt version for a (platform, category) key.
    ///
    /// Mints the next version number, deactivates all prior versions for the
    /// key, and inserts the new row as the active one -- atomically. Retries
    /// on a concurrent-save version conflict; a conflict that survives all
    /// attempts is returned to the caller (mapped to 409 upstream).
    ///
    /// Draft validation (placeholder, temperature, max_tokens) happens in
    /// `listforge-core` before this is called; nothing is written for an
    /// invalid draft.
    pub async fn save(
        pool: &PgPool,
        platform_id: DbId,
        category_id: DbId,
        draft: &PromptDraft,
    ) -> Result<Prompt, sqlx::Error> {
        let mut attempt = 1;
        loop {
            match Self::try_save(pool, platform_id, category_id, draft).await {
                Err(err) if is_version_conflict(&err) && attempt < SAVE_MAX_ATTEMPTS => {
                    tracing::warn!(
                        platform_id,
                        category_id,
                        attempt,
                        "Concurrent prompt save detected, retrying with fresh version"
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// One transactional deactivate-and-insert attempt.
    async fn try_save(
        pool: &PgPool,
        platform_id: DbId,
        category_id: DbId,
        draft: &PromptDraft,
    ) -> Result<Prompt, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Version computation and the write must share one transaction;
        // computing from a previously fetched list would race.
        let (prior_max,): (Option<f64>,) = sqlx::query_as(
            "SELECT MAX(version) FROM prompts WHERE platform_id = $1 AND category_id = $2",
        )
        .bind(platform_id)
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await?;

        let version = next_version(prior_max);

        sqlx::query(
            "UPDATE prompts SET is_active = false
             WHERE platform_id = $1 AND category_id = $2 AND is_active",
        )
        .bind(platform_id)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

        let insert = format!(
            "INSERT INTO prompts
                (platform_id, category_id, version, prompt_text,
                 temperature, max_tokens, model_id, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, true)
             RETURNING {COLUMNS}"
        );
        let prompt = sqlx::query_as::<_, Prompt>(&insert)
            .bind(platform_id)
            .bind(category_id)
            .bind(version)
            .bind(&draft.prompt_text)
            .bind(draft.temperature)
            .bind(draft.max_tokens)
            .bind(draft.model_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(prompt)
    }
}

/// Whether an error is a unique violation on one of the prompts-table
/// invariant constraints (a losing concurrent save).
fn is_version_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err
                    .constraint()
                    .is_some_and(|c| c.starts_with("uq_prompts"))
        }
        _ => false,
    }
}
