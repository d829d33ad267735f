use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatDto {
    pub id: i32,
    pub game_id: i32,
    pub team_id: i32,
    pub is_active: bool,
}

/// Active chat with the owning team's name, for the superuser overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActiveChatDto {
    pub id: i32,
    pub game_id: i32,
    pub team_id: i32,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub chat_id: i32,
    pub user_id: i32,
    pub date: DateTime<Utc>,
    pub content_type: String,
    pub text: Option<String>,
    pub reply_to: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMessageDto {
    pub chat_id: i32,
    #[validate(length(min = 1, max = 32))]
    pub content_type: String,
    #[validate(length(min = 1, max = 512))]
    pub text: Option<String>,
    pub reply_to: Option<i32>,
}
