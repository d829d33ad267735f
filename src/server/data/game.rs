//! Game data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::game::{CreateGameParam, Game, UpdateGameParam};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            owner_id: ActiveValue::Set(Some(param.owner_id)),
            name: ActiveValue::Set(param.name),
            legend: ActiveValue::Set(param.legend),
            datetime_start: ActiveValue::Set(param.datetime_start),
            datetime_end: ActiveValue::Set(param.datetime_end),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Games owned by a user, soonest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::game::Column::DatetimeStart)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<Game, DbErr> {
        let game = entity::prelude::Game::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Game {} not found", id)))?;

        let mut active_model: entity::game::ActiveModel = game.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(legend) = param.legend {
            active_model.legend = ActiveValue::Set(legend);
        }
        if let Some(datetime_start) = param.datetime_start {
            active_model.datetime_start = ActiveValue::Set(datetime_start);
        }
        if let Some(datetime_end) = param.datetime_end {
            active_model.datetime_end = ActiveValue::Set(datetime_end);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Game::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
