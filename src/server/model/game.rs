//! Game domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::game::{CreateGameDto, GameDto, UpdateGameDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub name: String,
    pub legend: String,
    pub datetime_start: DateTime<Utc>,
    pub datetime_end: DateTime<Utc>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            legend: self.legend,
            datetime_start: self.datetime_start,
            datetime_end: self.datetime_end,
        }
    }

    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            legend: entity.legend,
            datetime_start: entity.datetime_start,
            datetime_end: entity.datetime_end,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub owner_id: i32,
    pub name: String,
    pub legend: String,
    pub datetime_start: DateTime<Utc>,
    pub datetime_end: DateTime<Utc>,
}

impl CreateGameParam {
    pub fn from_dto(owner_id: i32, dto: CreateGameDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            legend: dto.legend,
            datetime_start: dto.datetime_start,
            datetime_end: dto.datetime_end,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGameParam {
    pub name: Option<String>,
    pub legend: Option<String>,
    pub datetime_start: Option<DateTime<Utc>>,
    pub datetime_end: Option<DateTime<Utc>>,
}

impl UpdateGameParam {
    pub fn from_dto(dto: UpdateGameDto) -> Self {
        Self {
            name: dto.name,
            legend: dto.legend,
            datetime_start: dto.datetime_start,
            datetime_end: dto.datetime_end,
        }
    }
}
