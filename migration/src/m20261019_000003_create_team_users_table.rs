use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000001_create_users_table::Users, m20261019_000002_create_teams_table::Teams,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamUsers::Table)
                    .if_not_exists()
                    .col(integer(TeamUsers::TeamId))
                    .col(integer_uniq(TeamUsers::UserId))
                    .primary_key(
                        Index::create()
                            .name("pk_team_users")
                            .col(TeamUsers::TeamId)
                            .col(TeamUsers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_users_team_id")
                            .from(TeamUsers::Table, TeamUsers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_users_user_id")
                            .from(TeamUsers::Table, TeamUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamUsers {
    Table,
    TeamId,
    UserId,
}
