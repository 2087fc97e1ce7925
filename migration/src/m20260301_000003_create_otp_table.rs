use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Otp::Table)
                    .if_not_exists()
                    .col(pk_auto(Otp::Id))
                    .col(string_uniq(Otp::PhoneNumber))
                    .col(string(Otp::Code))
                    .col(integer(Otp::Attempts).default(0))
                    .col(timestamp_with_time_zone(Otp::CreatedAt))
                    .col(timestamp_with_time_zone(Otp::ExpiresAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Otp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Otp {
    Table,
    Id,
    PhoneNumber,
    Code,
    Attempts,
    CreatedAt,
    ExpiresAt,
}
