//! Argon2id password hashing, verification, and strength validation.
//!
//! All password hashes use the Argon2id variant with a cryptographically
//! random salt generated via [`OsRng`]. The PHC string format is used for
//! storage so that algorithm parameters and salt are embedded in the hash
//! itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt,
/// and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate that a password meets minimum strength requirements.
///
/// Requires at least `min_length` characters, one letter, and one digit.
/// Returns a human-readable message describing the first failed check.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.len() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err("Password must contain at least one letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery 1").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password("correct horse battery 1", &hash).unwrap());
        assert!(!verify_password("wrong password 2", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_unique_salts() {
        let a = hash_password("repeatable password 1").unwrap();
        let b = hash_password("repeatable password 1").unwrap();
        assert_ne!(a, b, "salts must differ between hashes");
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn strength_requires_length() {
        let err = validate_password_strength("short1", 12).unwrap_err();
        assert!(err.contains("at least 12 characters"));
    }

    #[test]
    fn strength_requires_letter_and_digit() {
        assert!(validate_password_strength("123456789012", 12)
            .unwrap_err()
            .contains("letter"));
        assert!(validate_password_strength("abcdefghijkl", 12)
            .unwrap_err()
            .contains("digit"));
    }

    #[test]
    fn strong_password_passes() {
        assert!(validate_password_strength("sturdy passphrase 42", 12).is_ok());
    }
}
