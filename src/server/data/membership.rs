//! Generic repository for roster join tables.
//!
//! Team rosters, game task lists and game team lists are all `(collection_id, member_id)`
//! link tables. `JoinTable` describes one such table and `MembershipRepository` runs the
//! same queries against any of them, on a pooled connection or inside a transaction.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Description of a `(collection_id, member_id)` link table.
pub trait JoinTable {
    /// The link table entity.
    type Entity: EntityTrait;
    /// The entity on the member side of the link.
    type Member: EntityTrait;
    /// Active model used to insert a link.
    type Link: ActiveModelTrait<Entity = Self::Entity> + Send;

    /// Name of the collection side, used in error messages.
    const COLLECTION: &'static str;
    /// Name of the member side, used in error messages.
    const MEMBER: &'static str;

    fn collection_column() -> <Self::Entity as EntityTrait>::Column;
    fn member_column() -> <Self::Entity as EntityTrait>::Column;
    /// Primary key column of the member entity.
    fn member_id_column() -> <Self::Member as EntityTrait>::Column;
    fn link(collection_id: i32, member_id: i32) -> Self::Link;
}

/// Team roster: team <- user.
pub struct TeamUsers;

impl JoinTable for TeamUsers {
    type Entity = entity::prelude::TeamUser;
    type Member = entity::prelude::User;
    type Link = entity::team_user::ActiveModel;

    const COLLECTION: &'static str = "team";
    const MEMBER: &'static str = "user";

    fn collection_column() -> entity::team_user::Column {
        entity::team_user::Column::TeamId
    }

    fn member_column() -> entity::team_user::Column {
        entity::team_user::Column::UserId
    }

    fn member_id_column() -> entity::user::Column {
        entity::user::Column::Id
    }

    fn link(collection_id: i32, member_id: i32) -> Self::Link {
        entity::team_user::ActiveModel {
            team_id: ActiveValue::Set(collection_id),
            user_id: ActiveValue::Set(member_id),
        }
    }
}

/// Game task list: game <- task.
pub struct GameTasks;

impl JoinTable for GameTasks {
    type Entity = entity::prelude::GameTask;
    type Member = entity::prelude::Task;
    type Link = entity::game_task::ActiveModel;

    const COLLECTION: &'static str = "game";
    const MEMBER: &'static str = "task";

    fn collection_column() -> entity::game_task::Column {
        entity::game_task::Column::GameId
    }

    fn member_column() -> entity::game_task::Column {
        entity::game_task::Column::TaskId
    }

    fn member_id_column() -> entity::task::Column {
        entity::task::Column::Id
    }

    fn link(collection_id: i32, member_id: i32) -> Self::Link {
        entity::game_task::ActiveModel {
            game_id: ActiveValue::Set(collection_id),
            task_id: ActiveValue::Set(member_id),
        }
    }
}

/// Teams registered for a game: game <- team.
pub struct GameTeams;

impl JoinTable for GameTeams {
    type Entity = entity::prelude::GameTeam;
    type Member = entity::prelude::Team;
    type Link = entity::game_team::ActiveModel;

    const COLLECTION: &'static str = "game";
    const MEMBER: &'static str = "team";

    fn collection_column() -> entity::game_team::Column {
        entity::game_team::Column::GameId
    }

    fn member_column() -> entity::game_team::Column {
        entity::game_team::Column::TeamId
    }

    fn member_id_column() -> entity::team::Column {
        entity::team::Column::Id
    }

    fn link(collection_id: i32, member_id: i32) -> Self::Link {
        entity::game_team::ActiveModel {
            game_id: ActiveValue::Set(collection_id),
            team_id: ActiveValue::Set(member_id),
        }
    }
}

pub struct MembershipRepository<'a, R, C = DatabaseConnection> {
    db: &'a C,
    relation: PhantomData<R>,
}

impl<'a, R, C> MembershipRepository<'a, R, C>
where
    R: JoinTable,
    <R::Entity as EntityTrait>::Model: IntoActiveModel<R::Link>,
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            relation: PhantomData,
        }
    }

    /// Whether the link `(collection_id, member_id)` exists.
    pub async fn contains(&self, collection_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let link = R::Entity::find()
            .filter(R::collection_column().eq(collection_id))
            .filter(R::member_column().eq(member_id))
            .one(self.db)
            .await?;

        Ok(link.is_some())
    }

    /// Whether the member is linked to any collection at all.
    pub async fn is_linked(&self, member_id: i32) -> Result<bool, DbErr> {
        let link = R::Entity::find()
            .filter(R::member_column().eq(member_id))
            .one(self.db)
            .await?;

        Ok(link.is_some())
    }

    /// Whether the member row itself exists.
    pub async fn member_exists(&self, member_id: i32) -> Result<bool, DbErr> {
        let member = R::Member::find()
            .filter(R::member_id_column().eq(member_id))
            .one(self.db)
            .await?;

        Ok(member.is_some())
    }

    /// Inserts the link. Unique and foreign key violations surface as `DbErr`.
    pub async fn insert(&self, collection_id: i32, member_id: i32) -> Result<(), DbErr> {
        R::Entity::insert(R::link(collection_id, member_id))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the link.
    ///
    /// # Returns
    /// - `Ok(true)` - The link existed and was removed
    /// - `Ok(false)` - There was no such link
    pub async fn delete(&self, collection_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let result = R::Entity::delete_many()
            .filter(R::collection_column().eq(collection_id))
            .filter(R::member_column().eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Member ids linked to a collection.
    pub async fn member_ids(&self, collection_id: i32) -> Result<Vec<i32>, DbErr> {
        R::Entity::find()
            .select_only()
            .column(R::member_column())
            .filter(R::collection_column().eq(collection_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Member rows linked to a collection, ordered by member id.
    pub async fn members(
        &self,
        collection_id: i32,
    ) -> Result<Vec<<R::Member as EntityTrait>::Model>, DbErr> {
        let ids = self.member_ids(collection_id).await?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        R::Member::find()
            .filter(R::member_id_column().is_in(ids))
            .order_by_asc(R::member_id_column())
            .all(self.db)
            .await
    }
}
