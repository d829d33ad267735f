//! Team service: team records and their rosters.
//!
//! A user plays for at most one team, so roster additions go through
//! `MembershipService::add_exclusive`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{membership::TeamUsers, team::TeamRepository},
    error::AppError,
    model::{
        team::{CreateTeamParam, Team, UpdateTeamParam},
        user::User,
    },
    service::membership::MembershipService,
    util::db::conflict_on_unique,
};

const NAME_TAKEN: &str = "Team with this name already exists";

pub struct TeamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team owned by `param.owner_id`. The owner is not added to the roster.
    ///
    /// # Returns
    /// - `Ok(Team)` - The new team
    /// - `Err(AppError::Conflict)` - Name already taken
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, AppError> {
        let team_repo = TeamRepository::new(self.db);

        if team_repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        let team = team_repo
            .create(param)
            .await
            .map_err(|e| conflict_on_unique(e, NAME_TAKEN))?;

        tracing::info!("Created team {} ({})", team.id, team.name);

        Ok(team)
    }

    pub async fn get(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// The team `user_id` currently plays for, if any.
    pub async fn get_by_member(&self, user_id: i32) -> Result<Option<Team>, AppError> {
        Ok(TeamRepository::new(self.db).find_by_member(user_id).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::Conflict)` - New name belongs to another team
    pub async fn update(&self, id: i32, param: UpdateTeamParam) -> Result<Team, AppError> {
        let team_repo = TeamRepository::new(self.db);

        self.get(id).await?;

        if let Some(name) = &param.name {
            if let Some(other) = team_repo.find_by_name(name).await? {
                if other.id != id {
                    return Err(AppError::Conflict(NAME_TAKEN.to_string()));
                }
            }
        }

        let team = team_repo
            .update(id, param)
            .await
            .map_err(|e| conflict_on_unique(e, NAME_TAKEN))?;

        Ok(team)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        tracing::info!("Deleted team {}", id);

        Ok(())
    }

    pub async fn members(&self, team_id: i32) -> Result<Vec<User>, AppError> {
        let members = MembershipService::<TeamUsers>::new(self.db)
            .members(team_id)
            .await?;

        Ok(members.into_iter().map(User::from_entity).collect())
    }

    pub async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, AppError> {
        MembershipService::<TeamUsers>::new(self.db)
            .contains(team_id, user_id)
            .await
    }

    /// Adds a user to the roster and returns the updated roster.
    ///
    /// # Returns
    /// - `Err(MembershipError::AlreadyMember)` - Already on this team
    /// - `Err(MembershipError::MemberNotFound)` - No such user
    /// - `Err(MembershipError::MemberTaken)` - User plays for another team
    pub async fn add_member(&self, team_id: i32, user_id: i32) -> Result<Vec<User>, AppError> {
        MembershipService::<TeamUsers>::new(self.db)
            .add_exclusive(team_id, user_id)
            .await?;

        self.members(team_id).await
    }

    pub async fn remove_member(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        MembershipService::<TeamUsers>::new(self.db)
            .remove(team_id, user_id)
            .await
    }
}
