//! Pending one-time password domain model.

use chrono::{DateTime, Utc};

use crate::model::auth::{OtpRequestDto, OtpVerificationDto};

/// Wrong guesses allowed before a pending code is discarded.
pub const MAX_OTP_ATTEMPTS: i32 = 5;

/// A code sent to a phone number and awaiting verification.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOtp {
    pub id: i32,
    pub phone_number: String,
    pub code: String,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl PendingOtp {
    pub fn from_entity(entity: entity::otp::Model) -> Self {
        Self {
            id: entity.id,
            phone_number: entity.phone_number,
            code: entity.code,
            attempts: entity.attempts,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn matches(&self, input: &str) -> bool {
        self.code == input
    }

    /// Whole seconds until expiry, never negative.
    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

/// Parameters for storing a freshly generated code.
#[derive(Debug, Clone)]
pub struct StoreOtpParam {
    pub phone_number: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Parameters for requesting a code.
#[derive(Debug, Clone)]
pub struct RequestOtpParam {
    pub phone_number: String,
}

impl RequestOtpParam {
    pub fn from_dto(dto: OtpRequestDto) -> Self {
        Self {
            phone_number: dto.phone_number,
        }
    }
}

/// Parameters for verifying a code.
#[derive(Debug, Clone)]
pub struct VerifyOtpParam {
    pub phone_number: String,
    pub code: String,
}

impl VerifyOtpParam {
    pub fn from_dto(dto: OtpVerificationDto) -> Self {
        Self {
            phone_number: dto.phone_number,
            code: dto.otp_code,
        }
    }
}
