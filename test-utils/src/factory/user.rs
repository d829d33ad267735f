//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored when a test does not need a verifiable password.
pub const PLACEHOLDER_HASH: &str = "$argon2id$placeholder";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("ivan@example.com")
///     .superuser(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    patronymic: String,
    email: String,
    phone_number: String,
    hashed_password: String,
    is_active: bool,
    is_superuser: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - phone_number: 11 digits derived from the counter
    /// - active, not a superuser
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User{}", id),
            surname: "Ivanov".to_string(),
            patronymic: "Ivanovich".to_string(),
            email: format!("user{}@example.com", id),
            phone_number: format!("7{:010}", id),
            hashed_password: PLACEHOLDER_HASH.to_string(),
            is_active: true,
            is_superuser: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the stored password hash. Pass a real argon2 PHC string to test logins.
    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = hashed_password.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            patronymic: ActiveValue::Set(self.patronymic),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            hashed_password: ActiveValue::Set(self.hashed_password),
            games_played: ActiveValue::Set(0),
            win_games: ActiveValue::Set(0),
            is_active: ActiveValue::Set(self.is_active),
            is_superuser: ActiveValue::Set(self.is_superuser),
            is_verified: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a superuser with default values.
pub async fn create_superuser(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).superuser(true).build().await
}
