//! Query parameters shared by several handlers.

use serde::Deserialize;
use utoipa::IntoParams;

fn default_page() -> u64 {
    0
}

fn default_entries() -> u64 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationParam {
    /// Zero-indexed page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Owner filter for the game and task listings. Defaults to the caller.
#[derive(Debug, Deserialize, IntoParams)]
pub struct OwnerParam {
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserIdParam {
    pub user_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TaskIdParam {
    pub task_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TeamIdParam {
    pub team_id: i32,
}
