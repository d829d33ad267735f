//! Team data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::team::{CreateTeamParam, Team, UpdateTeamParam};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(Some(param.owner_id)),
            games_played: ActiveValue::Set(0),
            win_games: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds the team a user plays for, if any.
    pub async fn find_by_member(&self, user_id: i32) -> Result<Option<Team>, DbErr> {
        let Some(link) = entity::prelude::TeamUser::find()
            .filter(entity::team_user::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.find_by_id(link.team_id).await
    }

    pub async fn update(&self, id: i32, param: UpdateTeamParam) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Team {} not found", id)))?;

        let mut active_model: entity::team::ActiveModel = team.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(games_played) = param.games_played {
            active_model.games_played = ActiveValue::Set(games_played);
        }
        if let Some(win_games) = param.win_games {
            active_model.win_games = ActiveValue::Set(win_games);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Team::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
