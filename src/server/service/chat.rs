//! Chat service: message posting, history and active chat lookup.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chat::ChatRepository, message::MessageRepository, team::TeamRepository},
    error::AppError,
    middleware::access::ensure_chat_participant,
    model::{
        chat::{ActiveChat, Chat, CreateMessageParam, Message},
        user::User,
    },
};

pub struct ChatService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Chat, AppError> {
        ChatRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))
    }

    /// Loads the chat and checks that `user` may read and post in it.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown chat
    /// - `Err(AuthError::AccessDenied)` - Not a superuser and not on the chat's team
    pub async fn get_for_participant(&self, user: &User, chat_id: i32) -> Result<Chat, AppError> {
        let chat = self.get(chat_id).await?;

        let team_id = if user.is_superuser {
            None
        } else {
            TeamRepository::new(self.db)
                .find_by_member(user.id)
                .await?
                .map(|team| team.id)
        };

        ensure_chat_participant(user, team_id, chat.team_id)?;

        Ok(chat)
    }

    /// Stores a message authored by `param.user_id`.
    ///
    /// # Returns
    /// - `Ok((Chat, Message))` - The chat it was posted to and the stored message
    /// - `Err(AppError::NotFound)` - Unknown chat, or `reply_to` is not a message of this chat
    /// - `Err(AuthError::AccessDenied)` - Author is not a participant
    /// - `Err(AppError::BadRequest)` - Chat is no longer active
    pub async fn post_message(
        &self,
        author: &User,
        param: CreateMessageParam,
    ) -> Result<(Chat, Message), AppError> {
        let chat = self.get_for_participant(author, param.chat_id).await?;

        if !chat.is_active {
            return Err(AppError::BadRequest("Chat is not active".to_string()));
        }

        let message_repo = MessageRepository::new(self.db);

        if let Some(reply_to) = param.reply_to {
            let target = message_repo.find_by_id(reply_to).await?;
            if !matches!(target, Some(m) if m.chat_id == chat.id) {
                return Err(AppError::NotFound(
                    "Replied-to message not found in this chat".to_string(),
                ));
            }
        }

        let message = message_repo.create(param).await?;

        Ok((chat, message))
    }

    /// Messages of a chat in date order.
    pub async fn history(&self, chat_id: i32) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(self.db).get_by_chat(chat_id).await?)
    }

    pub async fn active_chats(&self) -> Result<Vec<ActiveChat>, AppError> {
        Ok(ChatRepository::new(self.db).get_active_with_team().await?)
    }

    /// The active chat of the team `user_id` plays for.
    ///
    /// # Returns
    /// - `Ok(None)` - User has no team, or the team has no active chat
    pub async fn active_chat_for_user(&self, user_id: i32) -> Result<Option<Chat>, AppError> {
        let Some(team) = TeamRepository::new(self.db).find_by_member(user_id).await? else {
            return Ok(None);
        };

        self.active_chat_for_team(team.id).await
    }

    pub async fn active_chat_for_team(&self, team_id: i32) -> Result<Option<Chat>, AppError> {
        Ok(ChatRepository::new(self.db)
            .find_active_by_team(team_id)
            .await?)
    }
}
