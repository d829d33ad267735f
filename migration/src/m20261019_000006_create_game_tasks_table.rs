use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000004_create_games_table::Games, m20261019_000005_create_tasks_table::Tasks,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameTasks::Table)
                    .if_not_exists()
                    .col(integer(GameTasks::GameId))
                    .col(integer(GameTasks::TaskId))
                    .primary_key(
                        Index::create()
                            .name("pk_game_tasks")
                            .col(GameTasks::GameId)
                            .col(GameTasks::TaskId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tasks_game_id")
                            .from(GameTasks::Table, GameTasks::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tasks_task_id")
                            .from(GameTasks::Table, GameTasks::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTasks {
    Table,
    GameId,
    TaskId,
}
