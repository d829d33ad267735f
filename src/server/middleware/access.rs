//! Ownership checks applied by handlers before touching a resource.
//!
//! Each check takes the authenticated user and the ids that decide access. Handlers run
//! them after confirming the resource exists, so an unknown id answers 404 before 403.

use crate::server::{error::auth::AuthError, model::user::User};

/// Allows superusers and the resource owner. A resource without an owner is superuser-only.
pub fn ensure_owner_or_superuser(user: &User, owner_id: Option<i32>) -> Result<(), AuthError> {
    if user.is_superuser || owner_id == Some(user.id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("not the owner (owner: {:?})", owner_id),
    ))
}

/// Allows superusers and the user acting on their own record.
pub fn ensure_self_or_superuser(user: &User, user_id: i32) -> Result<(), AuthError> {
    if user.is_superuser || user.id == user_id {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("cannot act on user {}", user_id),
    ))
}

pub fn ensure_superuser(user: &User) -> Result<(), AuthError> {
    if user.is_superuser {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        "superuser permission required".to_string(),
    ))
}

/// Allows superusers and members of the team the chat belongs to.
///
/// # Arguments
/// - `user_team_id` - Team the user currently plays for, if any
/// - `chat_team_id` - Team that owns the chat
pub fn ensure_chat_participant(
    user: &User,
    user_team_id: Option<i32>,
    chat_team_id: i32,
) -> Result<(), AuthError> {
    if user.is_superuser || user_team_id == Some(chat_team_id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("not a member of team {}", chat_team_id),
    ))
}
