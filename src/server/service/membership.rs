//! Roster mutations shared by team rosters, game task lists and game team lists.
//!
//! `MembershipService` runs the same add/remove algorithm over any `JoinTable`. Checks run
//! in a fixed order: an existing link is a conflict before a missing member is a not
//! found. Store errors from racing writers are translated to the same `MembershipError`
//! variants the checks produce.

use std::marker::PhantomData;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, SqlErr};

use crate::server::{
    data::membership::{JoinTable, MembershipRepository},
    error::{membership::MembershipError, AppError},
};

/// Roster mutator over one join table.
///
/// `C` is the connection the queries run on; pass a `DatabaseTransaction` to make a
/// roster change part of a larger unit of work.
pub struct MembershipService<'a, R, C = DatabaseConnection> {
    db: &'a C,
    relation: PhantomData<R>,
}

impl<'a, R, C> MembershipService<'a, R, C>
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

    /// Links `member_id` to `collection_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(MembershipError::AlreadyMember)` - Link already present
    /// - `Err(MembershipError::MemberNotFound)` - No member row with that id
    pub async fn add(&self, collection_id: i32, member_id: i32) -> Result<(), AppError> {
        self.add_checked(collection_id, member_id, false).await
    }

    /// Links `member_id` to `collection_id`, refusing members linked to any other collection.
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(MembershipError::AlreadyMember)` - Link already present
    /// - `Err(MembershipError::MemberNotFound)` - No member row with that id
    /// - `Err(MembershipError::MemberTaken)` - Member belongs to another collection
    pub async fn add_exclusive(&self, collection_id: i32, member_id: i32) -> Result<(), AppError> {
        self.add_checked(collection_id, member_id, true).await
    }

    async fn add_checked(
        &self,
        collection_id: i32,
        member_id: i32,
        exclusive: bool,
    ) -> Result<(), AppError> {
        let repo = MembershipRepository::<R, C>::new(self.db);

        if repo.contains(collection_id, member_id).await? {
            return Err(already_member::<R>(collection_id, member_id).into());
        }

        if !repo.member_exists(member_id).await? {
            return Err(member_not_found::<R>(member_id).into());
        }

        if exclusive && repo.is_linked(member_id).await? {
            return Err(MembershipError::MemberTaken {
                collection: R::COLLECTION,
                member: R::MEMBER,
                member_id,
            }
            .into());
        }

        repo.insert(collection_id, member_id)
            .await
            .map_err(|err| translate::<R>(err, collection_id, member_id))?;

        tracing::debug!(
            "Added {} {} to {} {}",
            R::MEMBER,
            member_id,
            R::COLLECTION,
            collection_id
        );

        Ok(())
    }

    /// Unlinks `member_id` from `collection_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed
    /// - `Err(MembershipError::NotMember)` - There was no such link
    pub async fn remove(&self, collection_id: i32, member_id: i32) -> Result<(), AppError> {
        let removed = MembershipRepository::<R, C>::new(self.db)
            .delete(collection_id, member_id)
            .await?;

        if !removed {
            return Err(MembershipError::NotMember {
                collection: R::COLLECTION,
                collection_id,
                member: R::MEMBER,
                member_id,
            }
            .into());
        }

        tracing::debug!(
            "Removed {} {} from {} {}",
            R::MEMBER,
            member_id,
            R::COLLECTION,
            collection_id
        );

        Ok(())
    }

    pub async fn contains(&self, collection_id: i32, member_id: i32) -> Result<bool, AppError> {
        Ok(MembershipRepository::<R, C>::new(self.db)
            .contains(collection_id, member_id)
            .await?)
    }

    pub async fn members(
        &self,
        collection_id: i32,
    ) -> Result<Vec<<R::Member as EntityTrait>::Model>, AppError> {
        Ok(MembershipRepository::<R, C>::new(self.db)
            .members(collection_id)
            .await?)
    }
}

fn already_member<R: JoinTable>(collection_id: i32, member_id: i32) -> MembershipError {
    MembershipError::AlreadyMember {
        collection: R::COLLECTION,
        collection_id,
        member: R::MEMBER,
        member_id,
    }
}

fn member_not_found<R: JoinTable>(member_id: i32) -> MembershipError {
    MembershipError::MemberNotFound {
        member: R::MEMBER,
        member_id,
    }
}

/// Maps a failed link insert to the error the checks would have produced.
fn translate<R: JoinTable>(err: DbErr, collection_id: i32, member_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            already_member::<R>(collection_id, member_id).into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => member_not_found::<R>(member_id).into(),
        _ => AppError::DbErr(err),
    }
}
