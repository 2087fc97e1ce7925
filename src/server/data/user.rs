//! User data repository for database operations.
//!
//! Users are created the first time a phone number completes OTP verification and
//! are looked up by ID when resolving a session.

use crate::server::model::user::User;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their row ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their verified phone number.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that phone number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::PhoneNumber.eq(phone_number))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns the user registered with `phone_number`, creating one if none exists.
    ///
    /// Called after a successful OTP verification; the first verification of a phone
    /// number doubles as registration.
    ///
    /// # Returns
    /// - `Ok(User)` - The existing or newly created user
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn find_or_create_by_phone_number(&self, phone_number: &str) -> Result<User, DbErr> {
        if let Some(user) = self.find_by_phone_number(phone_number).await? {
            return Ok(user);
        }

        let entity = entity::user::ActiveModel {
            phone_number: ActiveValue::Set(phone_number.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
