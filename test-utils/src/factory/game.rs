//! Game factory and game link helpers.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    legend: String,
    owner_id: Option<i32>,
    datetime_start: DateTime<Utc>,
    datetime_end: DateTime<Utc>,
}

impl<'a> GameFactory<'a> {
    /// Defaults to a two hour game starting one day from now, with no owner.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            name: format!("Game {}", next_id()),
            legend: "The city sleeps, the watch begins.".to_string(),
            owner_id: None,
            datetime_start: start,
            datetime_end: start + Duration::hours(2),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            legend: ActiveValue::Set(self.legend),
            owner_id: ActiveValue::Set(self.owner_id),
            datetime_start: ActiveValue::Set(self.datetime_start),
            datetime_end: ActiveValue::Set(self.datetime_end),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Registers a team for a game.
pub async fn add_team(
    db: &DatabaseConnection,
    game_id: i32,
    team_id: i32,
) -> Result<entity::game_team::Model, DbErr> {
    entity::game_team::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        team_id: ActiveValue::Set(team_id),
    }
    .insert(db)
    .await
}

/// Attaches a task to a game.
pub async fn add_task(
    db: &DatabaseConnection,
    game_id: i32,
    task_id: i32,
) -> Result<entity::game_task::Model, DbErr> {
    entity::game_task::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        task_id: ActiveValue::Set(task_id),
    }
    .insert(db)
    .await
}
