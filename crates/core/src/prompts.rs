//! Prompt template rules and version arithmetic.
//!
//! Validation for prompt drafts (placeholder presence, sampling-parameter
//! domains) and the revision-counter arithmetic used by the prompt version
//! store. Versions are plain one-decimal counters (1.0, 1.1, 1.2, ...),
//! not semver.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Literal token a prompt template must contain so the generation workflow
/// can substitute the product description before dispatch.
pub const PRODUCT_DESCRIPTION_PLACEHOLDER: &str = "{{product_description}}";

/// Maximum length for prompt templates in characters.
pub const MAX_PROMPT_LENGTH: usize = 10_000;

/// Inclusive sampling-temperature domain.
pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Smallest accepted token budget for a generation run.
pub const MIN_MAX_TOKENS: i32 = 1_000;

/// Version assigned to the first save for a (platform, category) key.
pub const INITIAL_VERSION: f64 = 1.0;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a prompt template: non-empty, within the length limit, and
/// containing the product-description placeholder.
pub fn validate_template(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Prompt text must not be empty".to_string(),
        ));
    }
    if text.len() > MAX_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt text exceeds maximum length of {MAX_PROMPT_LENGTH} characters (got {})",
            text.len()
        )));
    }
    if !text.contains(PRODUCT_DESCRIPTION_PLACEHOLDER) {
        return Err(CoreError::Validation(format!(
            "Prompt text must include the {PRODUCT_DESCRIPTION_PLACEHOLDER} placeholder"
        )));
    }
    Ok(())
}

/// Validate a sampling temperature: must lie in `[0.0, 1.0]`.
pub fn validate_temperature(temperature: f64) -> Result<(), CoreError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(CoreError::Validation(format!(
            "Temperature must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE} (got {temperature})"
        )));
    }
    Ok(())
}

/// Validate a token budget: must be at least [`MIN_MAX_TOKENS`].
pub fn validate_max_tokens(max_tokens: i32) -> Result<(), CoreError> {
    if max_tokens < MIN_MAX_TOKENS {
        return Err(CoreError::Validation(format!(
            "max_tokens must be at least {MIN_MAX_TOKENS} (got {max_tokens})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Version arithmetic
// ---------------------------------------------------------------------------

/// Compute the version for the next save given the highest existing version
/// for the key, or `None` when the key has never been saved.
///
/// The first save gets [`INITIAL_VERSION`]; every later save is
/// `prior_max + 0.1` rounded to one decimal place. Rounding in tenths keeps
/// repeated `+ 0.1` steps from accumulating floating-point drift, so the
/// sequence is exactly 1.0, 1.1, 1.2, ...
pub fn next_version(prior_max: Option<f64>) -> f64 {
    match prior_max {
        None => INITIAL_VERSION,
        Some(max) => ((max * 10.0).round() + 1.0) / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- validate_template --

    #[test]
    fn template_with_placeholder_passes() {
        assert!(validate_template("Generate keywords for {{product_description}}").is_ok());
    }

    #[test]
    fn template_without_placeholder_rejected() {
        let err = validate_template("Generate keywords for this product").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("{{product_description}}"));
        });
    }

    #[test]
    fn empty_template_rejected() {
        assert_matches!(validate_template(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_template("   \n"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn too_long_template_rejected() {
        let mut long = "{{product_description}}".to_string();
        long.push_str(&"x".repeat(MAX_PROMPT_LENGTH));
        let err = validate_template(&long).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("exceeds maximum length"));
        });
    }

    #[test]
    fn boundary_template_length_passes() {
        let placeholder = PRODUCT_DESCRIPTION_PLACEHOLDER;
        let padding = "x".repeat(MAX_PROMPT_LENGTH - placeholder.len());
        let exact = format!("{placeholder}{padding}");
        assert_eq!(exact.len(), MAX_PROMPT_LENGTH);
        assert!(validate_template(&exact).is_ok());
    }

    // -- validate_temperature --

    #[test]
    fn temperature_domain_bounds_pass() {
        assert!(validate_temperature(0.0).is_ok());
        assert!(validate_temperature(0.7).is_ok());
        assert!(validate_temperature(1.0).is_ok());
    }

    #[test]
    fn temperature_outside_domain_rejected() {
        assert_matches!(validate_temperature(-0.1), Err(CoreError::Validation(_)));
        assert_matches!(validate_temperature(1.1), Err(CoreError::Validation(_)));
    }

    // -- validate_max_tokens --

    #[test]
    fn max_tokens_at_minimum_passes() {
        assert!(validate_max_tokens(MIN_MAX_TOKENS).is_ok());
        assert!(validate_max_tokens(4_096).is_ok());
    }

    #[test]
    fn max_tokens_below_minimum_rejected() {
        assert_matches!(validate_max_tokens(999), Err(CoreError::Validation(_)));
        assert_matches!(validate_max_tokens(0), Err(CoreError::Validation(_)));
    }

    // -- next_version --

    #[test]
    fn first_version_is_one_point_zero() {
        assert_eq!(next_version(None), INITIAL_VERSION);
    }

    #[test]
    fn versions_step_by_one_tenth() {
        assert_eq!(format!("{:.1}", next_version(Some(1.0))), "1.1");
        assert_eq!(format!("{:.1}", next_version(Some(1.9))), "2.0");
        assert_eq!(format!("{:.1}", next_version(Some(2.3))), "2.4");
    }

    #[test]
    fn long_save_sequence_has_no_drift() {
        // 50 consecutive saves must yield exactly 1.0, 1.1, ..., 5.9.
        let mut version = next_version(None);
        for step in 0..50 {
            let expected = format!("{}.{}", 1 + step / 10, step % 10);
            assert_eq!(format!("{version:.1}"), expected);
            version = next_version(Some(version));
        }
    }

    #[test]
    fn sequence_is_strictly_increasing() {
        let mut version = next_version(None);
        for _ in 0..200 {
            let next = next_version(Some(version));
            assert!(next > version);
            version = next;
        }
    }
}
