//! Session data repository.
//!
//! Sessions are rows keyed by an opaque token. Expiry is checked by callers so that
//! an expired session can be reported distinctly before it is removed.

use crate::server::model::session::{CreateSessionParam, Session};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new session.
    ///
    /// # Returns
    /// - `Ok(Session)` - The stored session
    /// - `Err(DbErr)` - Database error, including a duplicate token
    pub async fn create(&self, param: CreateSessionParam) -> Result<Session, DbErr> {
        let entity = entity::session::ActiveModel {
            token: ActiveValue::Set(param.token),
            user_id: ActiveValue::Set(param.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(param.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Finds a session by token regardless of expiry.
    ///
    /// # Returns
    /// - `Ok(Some(Session))` - Session found
    /// - `Ok(None)` - No session with that token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }

    /// Deletes the session with the given token.
    ///
    /// # Returns
    /// - `Ok(true)` - A session was deleted
    /// - `Ok(false)` - No session matched the token
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_token(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a session by row ID.
    pub async fn delete(&self, session_id: i32) -> Result<(), DbErr> {
        entity::prelude::Session::delete_by_id(session_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Removes every session whose expiry has passed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
