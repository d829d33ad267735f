use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub owner_id: Option<i32>,
    pub games_played: i32,
    pub win_games: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamDto {
    #[validate(length(min = 1, max = 32))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamDto {
    #[validate(length(min = 1, max = 32))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub games_played: Option<i32>,
    #[validate(range(min = 0))]
    pub win_games: Option<i32>,
}
