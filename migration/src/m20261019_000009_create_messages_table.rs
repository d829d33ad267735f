use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000001_create_users_table::Users, m20261019_000008_create_chats_table::Chats,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(pk_auto(Messages::Id))
                    .col(integer(Messages::ChatId))
                    .col(integer(Messages::UserId))
                    .col(
                        timestamp_with_time_zone(Messages::Date)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(Messages::ContentType, 32))
                    .col(string_len_null(Messages::Text, 512))
                    .col(integer_null(Messages::ReplyTo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_chat_id")
                            .from(Messages::Table, Messages::ChatId)
                            .to(Chats::Table, Chats::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_user_id")
                            .from(Messages::Table, Messages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_messages_chat_id")
                            .col(Messages::ChatId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Messages {
    Table,
    Id,
    ChatId,
    UserId,
    Date,
    ContentType,
    Text,
    ReplyTo,
}
