use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// The `apikey` header is missing or does not match the configured secret.
    ///
    /// Results in a 401 Unauthorized response. Missing and mismatched keys share
    /// the same response so callers cannot probe which case applied.
    #[error("API key missing or invalid")]
    InvalidApiKey,

    /// No session identifier was supplied, or it names no stored session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is not associated with a session")]
    NotAuthenticated,

    /// The session exists but its expiry has passed.
    ///
    /// The stale session is removed before this error is returned.
    /// Results in a 401 Unauthorized response.
    #[error("Session {session_id} has expired")]
    SessionExpired {
        /// Row ID of the expired session
        session_id: i32,
    },

    /// No pending code for the phone number, or the submitted code is wrong.
    ///
    /// Results in a 400 Bad Request response.
    #[error("OTP code does not match a pending code")]
    OtpInvalid,

    /// The pending code's lifetime has elapsed.
    ///
    /// Results in a 400 Bad Request response.
    #[error("OTP code has expired")]
    OtpExpired,

    /// A still-valid code was already sent to this phone number.
    ///
    /// Results in a 429 Too Many Requests response with a `Retry-After` header.
    #[error("An OTP code was already sent, retry in {retry_after_seconds}s")]
    OtpAlreadySent {
        /// Seconds until the pending code expires
        retry_after_seconds: i64,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed variant is logged at debug
/// level by the caller.
///
/// # Returns
/// - 400 Bad Request - For invalid or expired OTP codes
/// - 401 Unauthorized - For API key and session failures
/// - 429 Too Many Requests - When a code is still pending for the phone number
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid API key".to_string(),
                }),
            )
                .into_response(),
            Self::NotAuthenticated | Self::SessionExpired { .. } => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Please log in to continue".to_string(),
                }),
            )
                .into_response(),
            Self::OtpInvalid => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "The verification code is incorrect".to_string(),
                }),
            )
                .into_response(),
            Self::OtpExpired => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "The verification code has expired, please request a new one"
                        .to_string(),
                }),
            )
                .into_response(),
            Self::OtpAlreadySent {
                retry_after_seconds,
            } => {
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(ErrorDto {
                        error: format!(
                            "A verification code was already sent, try again in {} seconds",
                            retry_after_seconds
                        ),
                    }),
                )
                    .into_response();
                response.headers_mut().insert(
                    header::RETRY_AFTER,
                    HeaderValue::from(retry_after_seconds.max(0)),
                );
                response
            }
        }
    }
}
