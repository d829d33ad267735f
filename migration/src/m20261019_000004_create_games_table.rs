use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_auto(Games::Id))
                    .col(integer_null(Games::OwnerId))
                    .col(string_len(Games::Name, 64))
                    .col(string_len(Games::Legend, 512))
                    .col(timestamp_with_time_zone(Games::DatetimeStart))
                    .col(timestamp_with_time_zone(Games::DatetimeEnd))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_owner_id")
                            .from(Games::Table, Games::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Games {
    Table,
    Id,
    OwnerId,
    Name,
    Legend,
    DatetimeStart,
    DatetimeEnd,
}
