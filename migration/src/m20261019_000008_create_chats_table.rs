use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000002_create_teams_table::Teams, m20261019_000004_create_games_table::Games,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chats::Table)
                    .if_not_exists()
                    .col(pk_auto(Chats::Id))
                    .col(integer(Chats::GameId))
                    .col(integer(Chats::TeamId))
                    .col(boolean(Chats::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_game_id")
                            .from(Chats::Table, Chats::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_team_id")
                            .from(Chats::Table, Chats::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_chats_game_team_unique")
                            .col(Chats::GameId)
                            .col(Chats::TeamId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chats {
    Table,
    Id,
    GameId,
    TeamId,
    IsActive,
}
