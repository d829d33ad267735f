//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs whose subject is the user id. The audience claim pins them to
//! this API.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

pub const TOKEN_AUDIENCE: &str = "nightwatch:auth";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    aud: String,
    exp: u64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: u64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issues an access token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalError)` - Clock or encoding failure
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("System clock before epoch: {}", e)))?;

        let claims = Claims {
            sub: user_id.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
            exp: now.as_secs() + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to encode access token: {}", e)))
    }

    /// Verifies signature, audience and expiry, and returns the user id.
    ///
    /// # Returns
    /// - `Ok(i32)` - The token's subject
    /// - `Err(AuthError::InvalidToken)` - Token rejected for any reason
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("Non-numeric subject '{}'", data.claims.sub)))
    }
}
