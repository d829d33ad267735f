//! User service for business logic.
//!
//! Lookups, the superuser listing and account updates. Updates re-check email and phone
//! uniqueness against other accounts and run a new password through the policy before
//! hashing it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, UpdateUserParam, User},
    util::{db::conflict_on_unique, password},
};

pub const MAX_PER_PAGE: u64 = 100;

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users with pagination.
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub async fn get_all(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let per_page = param.per_page.clamp(1, MAX_PER_PAGE);

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page,
            total_pages,
        })
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - Email or phone number belongs to another user
    /// - `Err(AppError::BadRequest)` - New password fails the policy
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let current = self.get(id).await?;

        if let Some(email) = &param.email {
            if let Some(other) = user_repo.find_by_email(email).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "User with this email already exists".to_string(),
                    ));
                }
            }
        }

        if let Some(phone_number) = &param.phone_number {
            if let Some(other) = user_repo.find_by_phone_number(phone_number).await? {
                if other.id != id {
                    return Err(AppError::Conflict(
                        "User with this phone number already exists".to_string(),
                    ));
                }
            }
        }

        let hashed_password = match &param.password {
            Some(new_password) => {
                let email = param.email.as_deref().unwrap_or(&current.email);
                password::check_policy(new_password, email)?;
                Some(password::hash(new_password).await?)
            }
            None => None,
        };

        let user = user_repo
            .update(id, param, hashed_password)
            .await
            .map_err(|e| conflict_on_unique(e, "User with this email or phone number already exists"))?;

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
