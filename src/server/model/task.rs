//! Task domain models and parameters.

use crate::model::task::{CreateTaskDto, TaskDto, UpdateTaskDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub level: i32,
    pub mystery_of_place: String,
    pub place: String,
    pub answer: String,
}

impl Task {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            owner_id: self.owner_id,
            level: self.level,
            mystery_of_place: self.mystery_of_place,
            place: self.place,
            answer: self.answer,
        }
    }

    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            level: entity.level,
            mystery_of_place: entity.mystery_of_place,
            place: entity.place,
            answer: entity.answer,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParam {
    pub owner_id: i32,
    pub level: i32,
    pub mystery_of_place: String,
    pub place: String,
    pub answer: String,
}

impl CreateTaskParam {
    pub fn from_dto(owner_id: i32, dto: CreateTaskDto) -> Self {
        Self {
            owner_id,
            level: dto.level,
            mystery_of_place: dto.mystery_of_place,
            place: dto.place,
            answer: dto.answer,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParam {
    pub level: Option<i32>,
    pub mystery_of_place: Option<String>,
    pub place: Option<String>,
    pub answer: Option<String>,
}

impl UpdateTaskParam {
    pub fn from_dto(dto: UpdateTaskDto) -> Self {
        Self {
            level: dto.level,
            mystery_of_place: dto.mystery_of_place,
            place: dto.place,
            answer: dto.answer,
        }
    }
}
