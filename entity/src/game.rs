//! A scheduled game with its own legend.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: Option<i32>,
    pub name: String,
    pub legend: String,
    pub datetime_start: ChronoDateTimeUtc,
    pub datetime_end: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Owner,
    #[sea_orm(has_many = "super::game_task::Entity")]
    GameTask,
    #[sea_orm(has_many = "super::game_team::Entity")]
    GameTeam,
    #[sea_orm(has_many = "super::chat::Entity")]
    Chat,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::game_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTask.def()
    }
}

impl Related<super::game_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTeam.def()
    }
}

impl Related<super::chat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
