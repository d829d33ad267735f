//! Game service: game records, their task lists and the teams playing them.
//!
//! Registering a team for a game opens that team's chat for the game; unregistering it
//! closes the chat. The roster link and the chat change commit together or not at all.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        chat::ChatRepository,
        game::GameRepository,
        membership::{GameTasks, GameTeams},
        user::UserRepository,
    },
    error::AppError,
    model::{
        chat::Chat,
        game::{CreateGameParam, Game, UpdateGameParam},
        task::Task,
        team::Team,
        user::User,
    },
    service::membership::MembershipService,
};

pub struct GameService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The new game
    /// - `Err(AppError::BadRequest)` - End is not after start
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        check_window(param.datetime_start, param.datetime_end)?;

        let game = GameRepository::new(self.db).create(param).await?;

        tracing::info!("Created game {} ({})", game.id, game.name);

        Ok(game)
    }

    pub async fn get(&self, id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }

    /// Games owned by a user, earliest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Possibly empty
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<Game>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(GameRepository::new(self.db).get_by_owner(user_id).await?)
    }

    /// Applies a partial update. The time window is checked after merging with the stored
    /// values, so moving only one end still has to leave `end > start`.
    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<Game, AppError> {
        let current = self.get(id).await?;

        check_window(
            param.datetime_start.unwrap_or(current.datetime_start),
            param.datetime_end.unwrap_or(current.datetime_end),
        )?;

        Ok(GameRepository::new(self.db).update(id, param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !GameRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        tracing::info!("Deleted game {}", id);

        Ok(())
    }

    /// The user who owns the game.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown game, or its owner was deleted
    pub async fn owner(&self, id: i32) -> Result<User, AppError> {
        let game = self.get(id).await?;

        let Some(owner_id) = game.owner_id else {
            return Err(AppError::NotFound("Game has no owner".to_string()));
        };

        UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn tasks(&self, game_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = MembershipService::<GameTasks>::new(self.db)
            .members(game_id)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Adds a task to the game and returns the updated task list.
    pub async fn add_task(&self, game_id: i32, task_id: i32) -> Result<Vec<Task>, AppError> {
        MembershipService::<GameTasks>::new(self.db)
            .add(game_id, task_id)
            .await?;

        self.tasks(game_id).await
    }

    pub async fn remove_task(&self, game_id: i32, task_id: i32) -> Result<(), AppError> {
        MembershipService::<GameTasks>::new(self.db)
            .remove(game_id, task_id)
            .await
    }

    pub async fn teams(&self, game_id: i32) -> Result<Vec<Team>, AppError> {
        let teams = MembershipService::<GameTeams>::new(self.db)
            .members(game_id)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Registers a team for the game, opens its chat and returns the updated team list.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Teams registered for the game
    /// - `Err(MembershipError)` - Team already registered, or no such team
    /// - `Err(AppError::DbErr)` - The chat could not be opened; the team is not registered
    pub async fn add_team(&self, game_id: i32, team_id: i32) -> Result<Vec<Team>, AppError> {
        let txn = self.db.begin().await?;

        MembershipService::<GameTeams, _>::new(&txn)
            .add(game_id, team_id)
            .await?;

        let chat = ChatRepository::new(&txn).open(game_id, team_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Opened chat {} for team {} in game {}",
            chat.id,
            team_id,
            game_id
        );

        self.teams(game_id).await
    }

    /// Unregisters a team and closes its chat for this game.
    ///
    /// # Returns
    /// - `Ok(Some(chat))` - The chat that was closed
    /// - `Ok(None)` - The team had no active chat for this game
    /// - `Err(MembershipError::NotMember)` - Team was not registered
    pub async fn remove_team(&self, game_id: i32, team_id: i32) -> Result<Option<Chat>, AppError> {
        let txn = self.db.begin().await?;

        MembershipService::<GameTeams, _>::new(&txn)
            .remove(game_id, team_id)
            .await?;

        let closed = ChatRepository::new(&txn)
            .deactivate(game_id, team_id)
            .await?;

        txn.commit().await?;

        if let Some(chat) = &closed {
            tracing::info!(
                "Closed chat {} of team {} in game {}",
                chat.id,
                team_id,
                game_id
            );
        }

        Ok(closed)
    }
}

fn check_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::BadRequest(
            "Game end must be after its start".to_string(),
        ));
    }

    Ok(())
}
