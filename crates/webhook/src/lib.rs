//! Client for the outbound generation webhook.
//!
//! Listing text generation is delegated to an external workflow-automation
//! webhook. This crate owns that HTTP contract: a basic-auth JSON POST of
//! `{ prompt_id, product_description, session_id }` answered by
//! `{ output }`. A single call triggers a non-idempotent generation run, so
//! the client never retries -- it is bounded by a request timeout and
//! surfaces failures verbatim to the caller.

use std::time::Duration;

use listforge_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for the generation webhook.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Full webhook URL the generation request is POSTed to.
    pub url: String,
    /// HTTP basic-auth username.
    pub username: String,
    /// HTTP basic-auth password.
    pub password: String,
    /// Per-request timeout in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl WebhookConfig {
    /// Load webhook configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `WEBHOOK_URL`         | **yes**  | --      |
    /// | `WEBHOOK_USERNAME`    | **yes**  | --      |
    /// | `WEBHOOK_PASSWORD`    | **yes**  | --      |
    /// | `WEBHOOK_TIMEOUT_SECS`| no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing -- webhook misconfiguration
    /// should fail at startup, not on the first test request.
    pub fn from_env() -> Self {
        let url = std::env::var("WEBHOOK_URL").expect("WEBHOOK_URL must be set");
        let username =
            std::env::var("WEBHOOK_USERNAME").expect("WEBHOOK_USERNAME must be set");
        let password =
            std::env::var("WEBHOOK_PASSWORD").expect("WEBHOOK_PASSWORD must be set");

        let timeout_secs: u64 = std::env::var("WEBHOOK_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("WEBHOOK_TIMEOUT_SECS must be a valid u64");

        Self {
            url,
            username,
            password,
            timeout_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body the generation webhook expects.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Id of the active prompt version to run.
    pub prompt_id: DbId,
    /// Description the workflow substitutes into the prompt template.
    pub product_description: String,
    /// Correlation id for the generation run.
    pub session_id: String,
}

/// Response body returned by the webhook on success.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    output: Option<String>,
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the generation webhook layer.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook returned a non-2xx status code.
    #[error("Generation webhook returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The webhook answered 2xx but the body carried no `output` field.
    #[error("No output received from the generation webhook")]
    MissingOutput,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the generation webhook.
pub struct GenerationClient {
    client: reqwest::Client,
    config: WebhookConfig,
}

impl GenerationClient {
    /// Create a new client with a pre-configured HTTP client.
    pub fn new(config: WebhookConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Run the active prompt against a product description.
    ///
    /// Sends one bounded POST and returns the generated text. Not retried
    /// here: a duplicate delivery would trigger a second generation run.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, WebhookError> {
        tracing::debug!(
            prompt_id = request.prompt_id,
            session_id = %request.session_id,
            "Dispatching generation request"
        );

        let response = self
            .client
            .post(&self.config.url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerationResponse = response.json().await?;
        parsed.output.ok_or(WebhookError::MissingOutput)
    }
}

/// Mint a correlation id for one generation run.
pub fn new_session_id() -> String {
    format!("session_{}", Uuid::new_v4().simple())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WebhookConfig {
        WebhookConfig {
            url: "https://workflows.example.com/webhook/generate".to_string(),
            username: "svc".to_string(),
            password: "secret".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[test]
    fn new_does_not_panic() {
        let _client = GenerationClient::new(test_config());
    }

    #[test]
    fn session_ids_are_prefixed_and_unique() {
        let a = new_session_id();
        let b = new_session_id();
        assert!(a.starts_with("session_"));
        assert_ne!(a, b);
    }

    #[test]
    fn request_serializes_expected_fields() {
        let request = GenerationRequest {
            prompt_id: 7,
            product_description: "Articulated dragon".to_string(),
            session_id: "session_test".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt_id"], 7);
        assert_eq!(json["product_description"], "Articulated dragon");
        assert_eq!(json["session_id"], "session_test");
    }

    #[test]
    fn http_status_error_display() {
        let err = WebhookError::HttpStatus {
            status: 502,
            body: "upstream down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Generation webhook returned HTTP 502: upstream down"
        );
    }

    #[test]
    fn missing_output_error_display() {
        assert_eq!(
            WebhookError::MissingOutput.to_string(),
            "No output received from the generation webhook"
        );
    }
}
