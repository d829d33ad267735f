use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Notification pushed over the per-user events socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventDto {
    /// A user asks the team owner to be added to the roster.
    JoinRequest {
        team_id: i32,
        team_name: String,
        user_id: i32,
        user_name: String,
    },
    TeamJoined {
        team_id: i32,
        team_name: String,
    },
    TeamLeft {
        team_id: i32,
        team_name: String,
    },
}
