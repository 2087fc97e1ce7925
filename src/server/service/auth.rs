//! OTP login service.
//!
//! A login is two requests: `request_otp` stores a six-digit code for the phone
//! number and texts it, `verify_otp` checks the submitted code and opens a session.
//! One code is pending per phone number at a time; a new one can only be requested
//! once the previous code has expired or been used.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{otp::OtpRepository, session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        otp::{RequestOtpParam, StoreOtpParam, VerifyOtpParam, MAX_OTP_ATTEMPTS},
        session::{CreateSessionParam, LoginSession},
    },
    service::sms::SmsGateway,
};

const SESSION_TOKEN_LENGTH: usize = 32;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    sms_gateway: &'a dyn SmsGateway,
    otp_ttl: Duration,
    session_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `sms_gateway` - Gateway used to deliver codes
    /// - `otp_ttl` - Lifetime of a sent code
    /// - `session_ttl` - Lifetime of a session opened by a verified code
    pub fn new(
        db: &'a DatabaseConnection,
        sms_gateway: &'a dyn SmsGateway,
        otp_ttl: Duration,
        session_ttl: Duration,
    ) -> Self {
        Self {
            db,
            sms_gateway,
            otp_ttl,
            session_ttl,
        }
    }

    /// Issues a code for a phone number and sends it by SMS.
    ///
    /// If sending fails the stored code is discarded so the caller can retry at once.
    ///
    /// # Returns
    /// - `Ok(i64)` - Seconds until the sent code expires
    /// - `Err(AuthError::OtpAlreadySent)` - An unexpired code is still pending
    /// - `Err(AppError)` - Database or SMS gateway failure
    pub async fn request_otp(&self, param: RequestOtpParam) -> Result<i64, AppError> {
        let otp_repo = OtpRepository::new(self.db);
        let now = Utc::now();

        let code = generate_otp_code();
        let stored = otp_repo
            .store_unless_pending(
                StoreOtpParam {
                    phone_number: param.phone_number.clone(),
                    code: code.clone(),
                    expires_at: now + self.otp_ttl,
                },
                now,
            )
            .await?;

        let Some(stored) = stored else {
            let retry_after_seconds = otp_repo
                .find_by_phone_number(&param.phone_number)
                .await?
                .map(|pending| pending.seconds_remaining(now))
                .unwrap_or(0);

            return Err(AuthError::OtpAlreadySent {
                retry_after_seconds,
            }
            .into());
        };

        if let Err(e) = self.sms_gateway.send_otp(&param.phone_number, &code).await {
            otp_repo.delete(stored.id).await?;
            return Err(e);
        }

        tracing::info!(otp_id = stored.id, "Sent OTP code");

        Ok(self.otp_ttl.num_seconds())
    }

    /// Verifies a submitted code and opens a session.
    ///
    /// The first successful verification of a phone number registers its user.
    /// Expired sessions of every user are pruned before the new one is stored.
    ///
    /// # Returns
    /// - `Ok(LoginSession)` - The new session and its user
    /// - `Err(AuthError::OtpInvalid)` - No pending code, or the code is wrong
    /// - `Err(AuthError::OtpExpired)` - The pending code expired; it is removed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn verify_otp(&self, param: VerifyOtpParam) -> Result<LoginSession, AppError> {
        let otp_repo = OtpRepository::new(self.db);
        let now = Utc::now();

        let Some(pending) = otp_repo.find_by_phone_number(&param.phone_number).await? else {
            return Err(AuthError::OtpInvalid.into());
        };

        if pending.is_expired(now) {
            otp_repo.delete(pending.id).await?;
            return Err(AuthError::OtpExpired.into());
        }

        if !pending.matches(&param.code) {
            let attempts = otp_repo.increment_attempts(&pending).await?;
            if attempts >= MAX_OTP_ATTEMPTS {
                tracing::info!(otp_id = pending.id, "Discarded OTP code after too many attempts");
                otp_repo.delete(pending.id).await?;
            }
            return Err(AuthError::OtpInvalid.into());
        }

        otp_repo.delete(pending.id).await?;

        let user = UserRepository::new(self.db)
            .find_or_create_by_phone_number(&param.phone_number)
            .await?;

        let session_repo = SessionRepository::new(self.db);

        let pruned = session_repo.delete_expired().await?;
        if pruned > 0 {
            tracing::debug!(count = pruned, "Pruned expired sessions");
        }

        let session = session_repo
            .create(CreateSessionParam {
                token: generate_session_token(),
                user_id: user.id,
                expires_at: now + self.session_ttl,
            })
            .await?;

        tracing::info!(user_id = user.id, session_id = session.id, "Opened session");

        Ok(LoginSession { session, user })
    }

    /// Ends the session named by `session_id`, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - A session was deleted
    /// - `Ok(false)` - No identifier was given or it named no session
    pub async fn logout(&self, session_id: Option<&str>) -> Result<bool, AppError> {
        let Some(token) = session_id else {
            return Ok(false);
        };

        Ok(SessionRepository::new(self.db).delete_by_token(token).await?)
    }
}

/// Generates a uniformly random six-digit code, zero padded.
fn generate_otp_code() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000u32))
}

/// Generates a random alphanumeric session token.
fn generate_session_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..SESSION_TOKEN_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
