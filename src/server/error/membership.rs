use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Outcome of a rejected roster add or remove.
///
/// `collection` and `member` name the relation sides, e.g. `"team"` and `"user"`.
#[derive(Error, Debug, PartialEq)]
pub enum MembershipError {
    #[error("{member} {member_id} is already in {collection} {collection_id}")]
    AlreadyMember {
        collection: &'static str,
        collection_id: i32,
        member: &'static str,
        member_id: i32,
    },

    #[error("{member} {member_id} is not in {collection} {collection_id}")]
    NotMember {
        collection: &'static str,
        collection_id: i32,
        member: &'static str,
        member_id: i32,
    },

    #[error("{member} {member_id} not found")]
    MemberNotFound { member: &'static str, member_id: i32 },

    /// The member is exclusive and already linked to a different collection.
    #[error("{member} {member_id} already belongs to another {collection}")]
    MemberTaken {
        collection: &'static str,
        member: &'static str,
        member_id: i32,
    },
}

/// # Returns
/// - 409 Conflict - For `AlreadyMember` and `MemberTaken`
/// - 404 Not Found - For `NotMember` and `MemberNotFound`
impl IntoResponse for MembershipError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyMember { .. } | Self::MemberTaken { .. } => StatusCode::CONFLICT,
            Self::NotMember { .. } | Self::MemberNotFound { .. } => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
