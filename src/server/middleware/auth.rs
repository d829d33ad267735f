use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    Superuser,
}

/// Resolves the bearer token on a request to an active user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase | InactiveUser)` - 401
    /// - `Err(AuthError::AccessDenied)` - A permission is missing; 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let user = authenticate(self.db, self.tokens, token).await?;

        for permission in permissions {
            match permission {
                Permission::Superuser => {
                    if !user.is_superuser {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "superuser permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Resolves a raw token to an active user.
///
/// Shared by the HTTP guard and the WebSocket handshake, where the token arrives as the
/// first frame instead of a header.
pub async fn authenticate(
    db: &DatabaseConnection,
    tokens: &TokenService,
    token: &str,
) -> Result<User, AppError> {
    let user_id = tokens.verify(token)?;

    let Some(user) = UserRepository::new(db).find_by_id(user_id).await? else {
        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    if !user.is_active {
        return Err(AuthError::InactiveUser(user.id).into());
    }

    Ok(user)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
