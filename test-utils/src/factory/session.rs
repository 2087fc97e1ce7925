//! Session factory for creating logged-in test sessions.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with customizable fields.
///
/// Defaults to a unique token that expires one day from now.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_in: Duration,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory for the given user.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("session-token-{}", next_id()),
            expires_in: Duration::days(1),
        }
    }

    /// Sets the session token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Makes the session already expired.
    pub fn expired(mut self) -> Self {
        self.expires_in = Duration::minutes(-5);
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        let now = Utc::now();
        entity::session::ActiveModel {
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + self.expires_in),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a live session for the user with default values.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}
