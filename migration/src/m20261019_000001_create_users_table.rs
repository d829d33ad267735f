use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Name, 32))
                    .col(string_len(Users::Surname, 32))
                    .col(string_len(Users::Patronymic, 32))
                    .col(string_uniq(Users::Email))
                    .col(string_len_uniq(Users::PhoneNumber, 11))
                    .col(string(Users::HashedPassword))
                    .col(integer(Users::GamesPlayed).default(0))
                    .col(integer(Users::WinGames).default(0))
                    .col(boolean(Users::IsActive).default(true))
                    .col(boolean(Users::IsSuperuser).default(false))
                    .col(boolean(Users::IsVerified).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Surname,
    Patronymic,
    Email,
    PhoneNumber,
    HashedPassword,
    GamesPlayed,
    WinGames,
    IsActive,
    IsSuperuser,
    IsVerified,
}
