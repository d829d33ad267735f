//! Chat and message factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ChatFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    team_id: i32,
    is_active: bool,
}

impl<'a> ChatFactory<'a> {
    /// Defaults to an active chat.
    pub fn new(db: &'a DatabaseConnection, game_id: i32, team_id: i32) -> Self {
        Self {
            db,
            game_id,
            team_id,
            is_active: true,
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::chat::Model, DbErr> {
        entity::chat::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            team_id: ActiveValue::Set(self.team_id),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_chat(
    db: &DatabaseConnection,
    game_id: i32,
    team_id: i32,
) -> Result<entity::chat::Model, DbErr> {
    ChatFactory::new(db, game_id, team_id).build().await
}

/// Inserts a plain text message authored by `user_id`.
pub async fn create_message(
    db: &DatabaseConnection,
    chat_id: i32,
    user_id: i32,
    text: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        chat_id: ActiveValue::Set(chat_id),
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(Utc::now()),
        content_type: ActiveValue::Set("text".to_string()),
        text: ActiveValue::Set(Some(text.into())),
        reply_to: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
