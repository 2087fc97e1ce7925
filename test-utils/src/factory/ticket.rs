//! Ticket factory for creating support tickets.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets.
///
/// Defaults to subject `"Ticket {id}"` with status `"open"`.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    subject: String,
    status: String,
}

impl<'a> TicketFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            subject: format!("Ticket {}", next_id()),
            status: "open".to_string(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let now = Utc::now();
        entity::ticket::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            subject: ActiveValue::Set(self.subject),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket for the user.
pub async fn create_ticket(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, user_id).build().await
}
