//! Team domain models and parameters.

use crate::model::team::{TeamDto, UpdateTeamDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub owner_id: Option<i32>,
    pub games_played: i32,
    pub win_games: i32,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            games_played: self.games_played,
            win_games: self.win_games,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            games_played: entity.games_played,
            win_games: entity.win_games,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParam {
    pub name: String,
    pub owner_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParam {
    pub name: Option<String>,
    pub games_played: Option<i32>,
    pub win_games: Option<i32>,
}

impl UpdateTeamParam {
    pub fn from_dto(dto: UpdateTeamDto) -> Self {
        Self {
            name: dto.name,
            games_played: dto.games_played,
            win_games: dto.win_games,
        }
    }
}
