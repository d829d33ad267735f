//! Chat and message domain models.

use chrono::{DateTime, Utc};

use crate::model::chat::{ActiveChatDto, ChatDto, CreateMessageDto, MessageDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i32,
    pub game_id: i32,
    pub team_id: i32,
    pub is_active: bool,
}

impl Chat {
    pub fn into_dto(self) -> ChatDto {
        ChatDto {
            id: self.id,
            game_id: self.game_id,
            team_id: self.team_id,
            is_active: self.is_active,
        }
    }

    pub fn from_entity(entity: entity::chat::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            team_id: entity.team_id,
            is_active: entity.is_active,
        }
    }
}

/// Active chat joined with its team's name.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveChat {
    pub chat: Chat,
    pub team_name: String,
}

impl ActiveChat {
    pub fn into_dto(self) -> ActiveChatDto {
        ActiveChatDto {
            id: self.chat.id,
            game_id: self.chat.game_id,
            team_id: self.chat.team_id,
            team_name: self.team_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub chat_id: i32,
    pub user_id: i32,
    pub date: DateTime<Utc>,
    pub content_type: String,
    pub text: Option<String>,
    pub reply_to: Option<i32>,
}

impl Message {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            chat_id: self.chat_id,
            user_id: self.user_id,
            date: self.date,
            content_type: self.content_type,
            text: self.text,
            reply_to: self.reply_to,
        }
    }

    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            chat_id: entity.chat_id,
            user_id: entity.user_id,
            date: entity.date,
            content_type: entity.content_type,
            text: entity.text,
            reply_to: entity.reply_to,
        }
    }
}

/// New message. The author is always the authenticated user, never the body.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    pub chat_id: i32,
    pub user_id: i32,
    pub content_type: String,
    pub text: Option<String>,
    pub reply_to: Option<i32>,
}

impl CreateMessageParam {
    pub fn from_dto(user_id: i32, dto: CreateMessageDto) -> Self {
        Self {
            chat_id: dto.chat_id,
            user_id,
            content_type: dto.content_type,
            text: dto.text,
            reply_to: dto.reply_to,
        }
    }
}
