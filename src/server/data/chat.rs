//! Chat data repository.
//!
//! A team has at most one active chat. `open` enforces this by deactivating every other
//! chat of the team inside the same transaction that activates the requested one.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionSession, TransactionTrait,
};

use crate::server::model::chat::{ActiveChat, Chat};

pub struct ChatRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chat>, DbErr> {
        let entity = entity::prelude::Chat::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chat::from_entity))
    }

    pub async fn find_active_by_team(&self, team_id: i32) -> Result<Option<Chat>, DbErr> {
        let entity = entity::prelude::Chat::find()
            .filter(entity::chat::Column::TeamId.eq(team_id))
            .filter(entity::chat::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Chat::from_entity))
    }

    /// Makes the chat for (game, team) the team's only active chat.
    ///
    /// Reuses the existing row for the pair if there is one, so message history survives
    /// a team being removed from and re-added to a game.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The active chat
    /// - `Err(DbErr)` - Database error; nothing is changed
    pub async fn open(&self, game_id: i32, team_id: i32) -> Result<Chat, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        entity::prelude::Chat::update_many()
            .filter(entity::chat::Column::TeamId.eq(team_id))
            .filter(entity::chat::Column::GameId.ne(game_id))
            .filter(entity::chat::Column::IsActive.eq(true))
            .col_expr(
                entity::chat::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(&txn)
            .await?;

        let existing = entity::prelude::Chat::find()
            .filter(entity::chat::Column::GameId.eq(game_id))
            .filter(entity::chat::Column::TeamId.eq(team_id))
            .one(&txn)
            .await?;

        let chat = match existing {
            Some(chat) => {
                let mut active_model: entity::chat::ActiveModel = chat.into();
                active_model.is_active = ActiveValue::Set(true);
                active_model.update(&txn).await?
            }
            None => {
                entity::chat::ActiveModel {
                    game_id: ActiveValue::Set(game_id),
                    team_id: ActiveValue::Set(team_id),
                    is_active: ActiveValue::Set(true),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(Chat::from_entity(chat))
    }

    /// Deactivates the chat for (game, team).
    ///
    /// # Returns
    /// - `Ok(Some(chat))` - The active chat that was closed
    /// - `Ok(None)` - No active chat for the pair
    pub async fn deactivate(&self, game_id: i32, team_id: i32) -> Result<Option<Chat>, DbErr> {
        let Some(chat) = entity::prelude::Chat::find()
            .filter(entity::chat::Column::GameId.eq(game_id))
            .filter(entity::chat::Column::TeamId.eq(team_id))
            .filter(entity::chat::Column::IsActive.eq(true))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::chat::ActiveModel = chat.into();
        active_model.is_active = ActiveValue::Set(false);
        let closed = active_model.update(self.db).await?;

        Ok(Some(Chat::from_entity(closed)))
    }

    /// All active chats with their team names, ordered by chat id.
    pub async fn get_active_with_team(&self) -> Result<Vec<ActiveChat>, DbErr> {
        let rows = entity::prelude::Chat::find()
            .filter(entity::chat::Column::IsActive.eq(true))
            .order_by_asc(entity::chat::Column::Id)
            .find_also_related(entity::prelude::Team)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(chat, team)| {
                team.map(|team| ActiveChat {
                    chat: Chat::from_entity(chat),
                    team_name: team.name,
                })
            })
            .collect())
    }
}
