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
                    .table(GameTeams::Table)
                    .if_not_exists()
                    .col(integer(GameTeams::GameId))
                    .col(integer(GameTeams::TeamId))
                    .primary_key(
                        Index::create()
                            .name("pk_game_teams")
                            .col(GameTeams::GameId)
                            .col(GameTeams::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_teams_game_id")
                            .from(GameTeams::Table, GameTeams::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_teams_team_id")
                            .from(GameTeams::Table, GameTeams::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTeams::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTeams {
    Table,
    GameId,
    TeamId,
}
