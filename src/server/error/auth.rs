use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, audience or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token was valid but its subject no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Account is deactivated.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// Login with an unknown email or a wrong password.
    #[error("Incorrect email or password")]
    BadCredentials,

    /// Superuser bootstrap code is wrong, used or expired.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,

    /// Authenticated user lacks the rights for this resource.
    ///
    /// # Fields
    /// - Id of the requesting user
    /// - Reason, logged but never sent to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every 401 carries `WWW-Authenticate: Bearer`. The detailed reason is logged at debug
/// level while clients get a short generic message.
///
/// # Returns
/// - 401 Unauthorized - For token, credential and admin code failures
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let unauthorized = |message: &str| {
            (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorDto {
                    error: message.to_string(),
                }),
            )
                .into_response()
        };

        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::UserNotInDatabase(_)
            | Self::InactiveUser(_) => unauthorized("Could not validate credentials"),
            Self::BadCredentials => unauthorized("Incorrect email or password"),
            Self::InvalidAdminCode => unauthorized("Invalid or expired admin code"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have access to this resource".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
