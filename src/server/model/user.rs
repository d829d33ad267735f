//! User domain models and parameters.

use crate::model::user::{PaginatedUsersDto, UpdateUserDto, UserDto};

/// Registered account.
///
/// Carries the stored password hash, so it never leaves the server as-is; use
/// `into_dto()` for responses.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub email: String,
    pub phone_number: String,
    pub hashed_password: String,
    pub games_played: i32,
    pub win_games: i32,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
            email: self.email,
            phone_number: self.phone_number,
            games_played: self.games_played,
            win_games: self.win_games,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
            is_verified: self.is_verified,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            patronymic: entity.patronymic,
            email: entity.email,
            phone_number: entity.phone_number,
            hashed_password: entity.hashed_password,
            games_played: entity.games_played,
            win_games: entity.win_games,
            is_active: entity.is_active,
            is_superuser: entity.is_superuser,
            is_verified: entity.is_verified,
        }
    }

    /// Name shown to other players, e.g. in join requests.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Parameters for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub email: String,
    pub phone_number: String,
    pub hashed_password: String,
}

/// Partial update of an account.
///
/// `password` is plaintext; the service checks it against the password policy and hashes
/// it before anything reaches the repository.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_verified: Option<bool>,
}

impl UpdateUserParam {
    /// Builds the update from a request body, keeping the account flags.
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            patronymic: dto.patronymic,
            email: dto.email,
            phone_number: dto.phone_number,
            password: dto.password,
            is_active: dto.is_active,
            is_superuser: dto.is_superuser,
            is_verified: dto.is_verified,
        }
    }

    /// Builds a self-service update. Account flags in the body are dropped.
    pub fn from_self_dto(dto: UpdateUserDto) -> Self {
        Self {
            is_active: None,
            is_superuser: None,
            is_verified: None,
            ..Self::from_dto(dto)
        }
    }
}

/// Page of users with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    /// Zero-indexed.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    pub page: u64,
    pub per_page: u64,
}
