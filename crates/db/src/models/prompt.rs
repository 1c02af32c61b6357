//! Prompt version entity and DTOs.
//!
//! A prompt row is one immutable version of the configuration for a
//! (platform, category) key. Saves insert new rows; the active flag moves,
//! the history stays.

use listforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A prompt version row from the `prompts` table.
///
/// `id`, `prompt_text`, `temperature`, `max_tokens`, and `model_id` are
/// exactly the fields the generation webhook flow needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub platform_id: DbId,
    pub category_id: DbId,
    /// One-decimal revision counter: 1.0, 1.1, 1.2, ...
    pub version: f64,
    pub prompt_text: String,
    pub temperature: f64,
    pub max_tokens: i32,
    pub model_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Draft fields supplied when saving a new prompt version.
///
/// Version number and active flag are never caller-supplied; the store
/// computes them.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptDraft {
    pub prompt_text: String,
    pub temperature: f64,
    pub max_tokens: i32,
    pub model_id: DbId,
}
