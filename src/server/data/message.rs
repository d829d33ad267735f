//! Message data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::chat::{CreateMessageParam, Message};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a message stamped with the current UTC time.
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            chat_id: ActiveValue::Set(param.chat_id),
            user_id: ActiveValue::Set(param.user_id),
            date: ActiveValue::Set(Utc::now()),
            content_type: ActiveValue::Set(param.content_type),
            text: ActiveValue::Set(param.text),
            reply_to: ActiveValue::Set(param.reply_to),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Message::from_entity))
    }

    /// Chat history, oldest first.
    pub async fn get_by_chat(&self, chat_id: i32) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .order_by_asc(entity::message::Column::Date)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }
}
