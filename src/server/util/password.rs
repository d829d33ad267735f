//! Password policy and argon2 hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Rejects passwords that are too short or contain the account email.
///
/// # Returns
/// - `Ok(())` - Password is acceptable
/// - `Err(AppError::BadRequest)` - Password breaks the policy
pub fn check_policy(password: &str, email: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password should be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if password.contains(email) {
        return Err(AppError::BadRequest(
            "Password should not contain e-mail".to_string(),
        ));
    }

    Ok(())
}

/// Hashes a password into an argon2id PHC string with a random salt.
///
/// Runs on the blocking pool.
pub async fn hash(password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks a password against a stored PHC string on the blocking pool.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Wrong password, or the stored hash does not parse
/// - `Err(AppError::InternalError)` - The blocking task panicked or was cancelled
pub async fn verify(password: &str, hashed: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hashed = hashed.to_string();

    tokio::task::spawn_blocking(move || verify_blocking(&password, &hashed))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}

fn hash_blocking(password: &str) -> Result<String, AppError> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hashed.to_string())
}

fn verify_blocking(password: &str, hashed: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hashed) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the minimum length rule.
    ///
    /// Expected: Err(AppError::BadRequest) for 7 characters
    #[test]
    fn rejects_short_password() {
        let result = check_policy("abc1234", "ivan@example.com");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that the email cannot be part of the password.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[test]
    fn rejects_password_containing_email() {
        let result = check_policy("xx-ivan@example.com-xx", "ivan@example.com");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that a long enough unrelated password passes.
    ///
    /// Expected: Ok
    #[test]
    fn accepts_reasonable_password() {
        assert!(check_policy("night-owl-42", "ivan@example.com").is_ok());
    }

    /// Tests that a hash verifies only with the original password.
    ///
    /// Expected: original password verifies, a different one does not
    #[tokio::test]
    async fn verifies_hashed_password() {
        let hashed = hash("night-owl-42").await.unwrap();

        assert!(hashed.starts_with("$argon2"));
        assert!(verify("night-owl-42", &hashed).await.unwrap());
        assert!(!verify("night-owl-43", &hashed).await.unwrap());
    }

    /// Tests that two hashes of the same password differ by salt.
    ///
    /// Expected: distinct hash strings
    #[tokio::test]
    async fn salts_each_hash() {
        let first = hash("night-owl-42").await.unwrap();
        let second = hash("night-owl-42").await.unwrap();

        assert_ne!(first, second);
    }

    /// Tests that garbage in the hash column never authenticates.
    ///
    /// Expected: false
    #[tokio::test]
    async fn rejects_malformed_hash() {
        assert!(!verify("anything", "not-a-phc-string").await.unwrap());
    }
}
