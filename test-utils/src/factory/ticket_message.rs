//! Ticket message factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating messages on an existing ticket.
///
/// Defaults to a user-authored text message without an image.
pub struct TicketMessageFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: i32,
    from_admin: bool,
    content: Option<String>,
    image: Option<String>,
}

impl<'a> TicketMessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, ticket_id: i32) -> Self {
        Self {
            db,
            ticket_id,
            from_admin: false,
            content: Some("Hello".to_string()),
            image: None,
        }
    }

    pub fn from_admin(mut self, from_admin: bool) -> Self {
        self.from_admin = from_admin;
        self
    }

    pub fn content(mut self, content: Option<&str>) -> Self {
        self.content = content.map(str::to_string);
        self
    }

    pub fn image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self
    }

    pub async fn build(self) -> Result<entity::ticket_message::Model, DbErr> {
        entity::ticket_message::ActiveModel {
            ticket_id: ActiveValue::Set(self.ticket_id),
            from_admin: ActiveValue::Set(self.from_admin),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default text message on the ticket.
pub async fn create_ticket_message(
    db: &DatabaseConnection,
    ticket_id: i32,
) -> Result<entity::ticket_message::Model, DbErr> {
    TicketMessageFactory::new(db, ticket_id).build().await
}
