//! Support ticket data repository.
//!
//! Covers tickets and their messages. Status transitions are decided by the
//! ticket service; this layer only persists them.

use crate::server::model::ticket::{
    AddTicketMessageParam, CreateTicketParam, Ticket, TicketMessage, TicketStatus,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an open ticket without messages.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket with status `Open`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: &CreateTicketParam) -> Result<Ticket, DbErr> {
        let now = Utc::now();
        let entity = entity::ticket::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            subject: ActiveValue::Set(param.subject.clone()),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        to_ticket(entity)
    }

    pub async fn find_by_id(&self, ticket_id: i32) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Ticket::find_by_id(ticket_id)
            .one(self.db)
            .await?;

        entity.map(to_ticket).transpose()
    }

    /// Gets one user's tickets, newest first.
    ///
    /// # Returns
    /// - `Ok((tickets, total))` - Tickets for the requested page and the user's ticket count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Ticket>, u64), DbErr> {
        let query =
            entity::prelude::Ticket::find().filter(entity::ticket::Column::UserId.eq(user_id));

        self.paginate(query, page, per_page).await
    }

    /// Gets every ticket, newest first.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Ticket>, u64), DbErr> {
        self.paginate(entity::prelude::Ticket::find(), page, per_page)
            .await
    }

    async fn paginate(
        &self,
        query: Select<entity::prelude::Ticket>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Ticket>, u64), DbErr> {
        let paginator = query
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .order_by_desc(entity::ticket::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tickets = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(to_ticket)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((tickets, total))
    }

    /// Sets a ticket's status and refreshes its `updated_at`.
    pub async fn set_status(&self, ticket_id: i32, status: TicketStatus) -> Result<(), DbErr> {
        entity::prelude::Ticket::update_many()
            .filter(entity::ticket::Column::Id.eq(ticket_id))
            .col_expr(
                entity::ticket::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .col_expr(
                entity::ticket::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Appends a message to a ticket.
    pub async fn add_message(&self, param: AddTicketMessageParam) -> Result<TicketMessage, DbErr> {
        let entity = entity::ticket_message::ActiveModel {
            ticket_id: ActiveValue::Set(param.ticket_id),
            from_admin: ActiveValue::Set(param.from_admin),
            content: ActiveValue::Set(param.content),
            image: ActiveValue::Set(param.image),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TicketMessage::from_entity(entity))
    }

    /// Gets a ticket's messages, oldest first.
    pub async fn get_messages(&self, ticket_id: i32) -> Result<Vec<TicketMessage>, DbErr> {
        let entities = entity::prelude::TicketMessage::find()
            .filter(entity::ticket_message::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::ticket_message::Column::CreatedAt)
            .order_by_asc(entity::ticket_message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TicketMessage::from_entity).collect())
    }
}

fn to_ticket(entity: entity::ticket::Model) -> Result<Ticket, DbErr> {
    Ticket::from_entity(entity).map_err(DbErr::Custom)
}
