use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a unique constraint violation to `AppError::Conflict`, passing other errors on.
///
/// Catches duplicates written between a service's pre-check and its own insert.
pub fn conflict_on_unique(err: DbErr, message: impl Into<String>) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.into()),
        _ => AppError::DbErr(err),
    }
}
