use sea_orm_migration::{prelude::*, schema::*};

use super::m20260303_000005_create_ticket_table::Ticket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketMessage::Id))
                    .col(integer(TicketMessage::TicketId))
                    .col(boolean(TicketMessage::FromAdmin).default(false))
                    .col(text_null(TicketMessage::Content))
                    .col(string_null(TicketMessage::Image))
                    .col(timestamp_with_time_zone(TicketMessage::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_message_ticket_id")
                            .from(TicketMessage::Table, TicketMessage::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketMessage {
    Table,
    Id,
    TicketId,
    FromAdmin,
    Content,
    Image,
    CreatedAt,
}
