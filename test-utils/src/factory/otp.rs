//! OTP factory for creating pending one-time codes.

use crate::factory::helpers::next_phone_number;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating pending OTP records.
///
/// Defaults:
/// - phone_number: a unique valid mobile number
/// - code: `"123456"`
/// - attempts: `0`
/// - expires two minutes from now
pub struct OtpFactory<'a> {
    db: &'a DatabaseConnection,
    phone_number: String,
    code: String,
    attempts: i32,
    expires_in: Duration,
}

impl<'a> OtpFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            phone_number: next_phone_number(),
            code: "123456".to_string(),
            attempts: 0,
            expires_in: Duration::minutes(2),
        }
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Makes the code already expired.
    pub fn expired(mut self) -> Self {
        self.expires_in = Duration::seconds(-30);
        self
    }

    pub async fn build(self) -> Result<entity::otp::Model, DbErr> {
        let now = Utc::now();
        entity::otp::ActiveModel {
            phone_number: ActiveValue::Set(self.phone_number),
            code: ActiveValue::Set(self.code),
            attempts: ActiveValue::Set(self.attempts),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + self.expires_in),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending OTP for `phone_number` with the default code.
pub async fn create_otp(
    db: &DatabaseConnection,
    phone_number: impl Into<String>,
) -> Result<entity::otp::Model, DbErr> {
    OtpFactory::new(db).phone_number(phone_number).build().await
}
