use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Horse::Table)
                    .if_not_exists()
                    .col(pk_auto(Horse::Id))
                    .col(string(Horse::Name))
                    .col(string_null(Horse::Url).unique_key())
                    .col(text_null(Horse::Description))
                    .col(big_integer(Horse::Price))
                    .col(timestamp_with_time_zone(Horse::CreatedAt))
                    .col(timestamp_with_time_zone(Horse::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Horse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Horse {
    Table,
    Id,
    Name,
    Url,
    Description,
    Price,
    CreatedAt,
    UpdatedAt,
}
