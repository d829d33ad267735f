//! User data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active, unverified, non-superuser account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or phone
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            patronymic: ActiveValue::Set(param.patronymic),
            email: ActiveValue::Set(param.email),
            phone_number: ActiveValue::Set(param.phone_number),
            hashed_password: ActiveValue::Set(param.hashed_password),
            games_played: ActiveValue::Set(0),
            win_games: ActiveValue::Set(0),
            is_active: ActiveValue::Set(true),
            is_superuser: ActiveValue::Set(false),
            is_verified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Applies a partial update.
    ///
    /// `param.password` is ignored; pass the already hashed value as `hashed_password`.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateUserParam,
        hashed_password: Option<String>,
    ) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(surname) = param.surname {
            active_model.surname = ActiveValue::Set(surname);
        }
        if let Some(patronymic) = param.patronymic {
            active_model.patronymic = ActiveValue::Set(patronymic);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone_number) = param.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(hashed_password) = hashed_password {
            active_model.hashed_password = ActiveValue::Set(hashed_password);
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(is_superuser) = param.is_superuser {
            active_model.is_superuser = ActiveValue::Set(is_superuser);
        }
        if let Some(is_verified) = param.is_verified {
            active_model.is_verified = ActiveValue::Set(is_verified);
        }

        let updated = active_model.update(self.db).await?;

        Ok(User::from_entity(updated))
    }

    /// Deletes a user. Roster links cascade; owned teams, games and tasks lose their owner.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn superuser_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::IsSuperuser.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_superuser(&self, id: i32, is_superuser: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::IsSuperuser,
                sea_orm::sea_query::Expr::value(is_superuser),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets one page of users ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the page and the total number of users
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }
}
