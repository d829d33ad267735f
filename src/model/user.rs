use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub email: String,
    pub phone_number: String,
    pub games_played: i32,
    pub win_games: i32,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

/// Partial user update. The account flags are honoured only on the superuser route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 32))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub surname: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub patronymic: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(equal = 11))]
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
