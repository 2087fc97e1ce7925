//! Support ticket service.
//!
//! Customers open tickets and post messages on their own tickets; support staff
//! reply through the admin routes. A customer message sets the ticket back to
//! `open`, a support reply marks it `answered`, and a `closed` ticket accepts no
//! further messages.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::ticket::TicketRepository,
    error::AppError,
    model::{
        pagination::{PageParam, Paginated},
        ticket::{
            AddTicketMessageParam, CreateTicketParam, Ticket, TicketDetail, TicketMessage,
            TicketStatus,
        },
    },
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a ticket with its first message.
    ///
    /// # Returns
    /// - `Ok(TicketDetail)` - The open ticket and its single message
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateTicketParam) -> Result<TicketDetail, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket = repo.create(&param).await?;
        let message = repo
            .add_message(AddTicketMessageParam {
                ticket_id: ticket.id,
                from_admin: false,
                content: param.content,
                image: param.image,
            })
            .await?;

        tracing::info!(ticket_id = ticket.id, user_id = ticket.user_id, "Opened ticket");

        Ok(TicketDetail {
            ticket,
            messages: vec![message],
        })
    }

    /// Lists one user's tickets, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: PageParam,
    ) -> Result<Paginated<Ticket>, AppError> {
        let (tickets, total) = TicketRepository::new(self.db)
            .get_by_user_paginated(user_id, page.page, page.per_page)
            .await?;

        Ok(Paginated::new(tickets, total, page))
    }

    /// Lists every ticket, newest first.
    pub async fn list_all(&self, page: PageParam) -> Result<Paginated<Ticket>, AppError> {
        let (tickets, total) = TicketRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(tickets, total, page))
    }

    /// Loads any ticket with its messages, oldest first.
    pub async fn get(&self, ticket_id: i32) -> Result<TicketDetail, AppError> {
        let ticket = self.find(ticket_id).await?;

        self.with_messages(ticket).await
    }

    /// Loads a ticket with its messages if it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(TicketDetail)` - The user's ticket
    /// - `Err(AppError::NotFound)` - No such ticket, or it belongs to someone else
    pub async fn get_for_user(
        &self,
        user_id: i32,
        ticket_id: i32,
    ) -> Result<TicketDetail, AppError> {
        let ticket = self.find_owned(user_id, ticket_id).await?;

        self.with_messages(ticket).await
    }

    /// Posts a customer message on their own ticket and reopens it.
    ///
    /// # Returns
    /// - `Ok(TicketMessage)` - The stored message
    /// - `Err(AppError::NotFound)` - No such ticket for this user
    /// - `Err(AppError::BadRequest)` - The ticket is closed
    pub async fn add_user_message(
        &self,
        user_id: i32,
        param: AddTicketMessageParam,
    ) -> Result<TicketMessage, AppError> {
        let ticket = self.find_owned(user_id, param.ticket_id).await?;

        self.post(ticket, param, TicketStatus::Open).await
    }

    /// Posts a support reply and marks the ticket answered.
    ///
    /// # Returns
    /// - `Ok(TicketMessage)` - The stored reply
    /// - `Err(AppError::NotFound)` - No such ticket
    /// - `Err(AppError::BadRequest)` - The ticket is closed
    pub async fn reply(&self, param: AddTicketMessageParam) -> Result<TicketMessage, AppError> {
        let ticket = self.find(param.ticket_id).await?;

        self.post(ticket, param, TicketStatus::Answered).await
    }

    /// Closes a user's ticket. Closing a closed ticket is a no-op.
    pub async fn close(&self, user_id: i32, ticket_id: i32) -> Result<Ticket, AppError> {
        let ticket = self.find_owned(user_id, ticket_id).await?;

        if ticket.status == TicketStatus::Closed {
            return Ok(ticket);
        }

        let repo = TicketRepository::new(self.db);
        repo.set_status(ticket.id, TicketStatus::Closed).await?;

        tracing::info!(ticket_id, "Closed ticket");

        self.find(ticket_id).await
    }

    async fn post(
        &self,
        ticket: Ticket,
        param: AddTicketMessageParam,
        status: TicketStatus,
    ) -> Result<TicketMessage, AppError> {
        if ticket.status == TicketStatus::Closed {
            return Err(AppError::BadRequest(format!(
                "Ticket {} is closed",
                ticket.id
            )));
        }

        let repo = TicketRepository::new(self.db);
        let message = repo.add_message(param).await?;
        repo.set_status(ticket.id, status).await?;

        Ok(message)
    }

    async fn find(&self, ticket_id: i32) -> Result<Ticket, AppError> {
        TicketRepository::new(self.db)
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| ticket_not_found(ticket_id))
    }

    async fn find_owned(&self, user_id: i32, ticket_id: i32) -> Result<Ticket, AppError> {
        let ticket = self.find(ticket_id).await?;

        if ticket.user_id != user_id {
            return Err(ticket_not_found(ticket_id));
        }

        Ok(ticket)
    }

    async fn with_messages(&self, ticket: Ticket) -> Result<TicketDetail, AppError> {
        let messages = TicketRepository::new(self.db)
            .get_messages(ticket.id)
            .await?;

        Ok(TicketDetail { ticket, messages })
    }
}

fn ticket_not_found(ticket_id: i32) -> AppError {
    AppError::NotFound(format!("Ticket {} not found", ticket_id))
}
