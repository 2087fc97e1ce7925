//! Pending OTP data repository.
//!
//! At most one pending code exists per phone number; a new code can only replace
//! an expired one, and doing so resets the attempt counter.

use crate::server::model::otp::{PendingOtp, StoreOtpParam};
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, OnConflict}, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a code for a phone number unless an unexpired one is pending.
    ///
    /// An expired code is replaced in the same statement, so two concurrent
    /// requests cannot both store a code.
    ///
    /// # Returns
    /// - `Ok(Some(PendingOtp))` - The stored code with zero attempts
    /// - `Ok(None)` - A code that expires after `now` is still pending
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn store_unless_pending(
        &self,
        param: StoreOtpParam,
        now: DateTime<Utc>,
    ) -> Result<Option<PendingOtp>, DbErr> {
        let phone_number = param.phone_number.clone();

        let rows = entity::prelude::Otp::insert(entity::otp::ActiveModel {
            phone_number: ActiveValue::Set(param.phone_number),
            code: ActiveValue::Set(param.code),
            attempts: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(param.expires_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::otp::Column::PhoneNumber)
                .update_columns([
                    entity::otp::Column::Code,
                    entity::otp::Column::Attempts,
                    entity::otp::Column::CreatedAt,
                    entity::otp::Column::ExpiresAt,
                ])
                .action_and_where(entity::otp::Column::ExpiresAt.lte(now))
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        if rows == 0 {
            return Ok(None);
        }

        self.find_by_phone_number(&phone_number).await
    }

    /// Finds the pending code for a phone number regardless of expiry.
    pub async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<PendingOtp>, DbErr> {
        let entity = entity::prelude::Otp::find()
            .filter(entity::otp::Column::PhoneNumber.eq(phone_number))
            .one(self.db)
            .await?;

        Ok(entity.map(PendingOtp::from_entity))
    }

    /// Records one wrong guess against a pending code.
    ///
    /// # Returns
    /// - `Ok(i32)` - The attempt count after this guess
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_attempts(&self, otp: &PendingOtp) -> Result<i32, DbErr> {
        let attempts = otp.attempts + 1;

        entity::prelude::Otp::update_many()
            .filter(entity::otp::Column::Id.eq(otp.id))
            .col_expr(entity::otp::Column::Attempts, Expr::value(attempts))
            .exec(self.db)
            .await?;

        Ok(attempts)
    }

    /// Deletes a pending code by row ID.
    pub async fn delete(&self, otp_id: i32) -> Result<(), DbErr> {
        entity::prelude::Otp::delete_by_id(otp_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
