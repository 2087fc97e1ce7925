use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::auth::{OtpRequestDto, OtpSentDto, OtpVerificationDto},
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{clear_session_cookie, session_cookie, SessionId},
        },
        model::otp::{RequestOtpParam, VerifyOtpParam},
        service::auth::AuthService,
        state::AppState,
        validation::ValidatedJson,
    },
};

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        &state.db,
        state.sms_gateway.as_ref(),
        state.config.otp_ttl,
        state.config.session_ttl,
    )
}

/// Sends a one-time code to a phone number.
///
/// # Arguments
/// - `state` - Application state containing the database and SMS gateway
/// - `payload` - `{ phoneNumber }`, validated against the phone number rules
///
/// # Returns
/// - `200 OK` - `{ expiresInSeconds }` for the code just sent
/// - `400 Bad Request` - The phone number failed validation
/// - `429 Too Many Requests` - A code sent earlier has not expired yet
/// - `500 Internal Server Error` - Database or SMS gateway error
pub async fn request_otp(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OtpRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let expires_in_seconds = auth_service(&state)
        .request_otp(RequestOtpParam::from_dto(payload))
        .await?;

    Ok(Json(OtpSentDto { expires_in_seconds }))
}

/// Verifies a one-time code and logs the user in.
///
/// Sets the `sessionId` cookie and also returns the token in the body for clients
/// that send it back in the `x-session-id` header instead.
///
/// # Returns
/// - `200 OK` - `SessionDto` with the new session and its user
/// - `400 Bad Request` - Validation failure, wrong code, or expired code
/// - `500 Internal Server Error` - Database error
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OtpVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let login = auth_service(&state)
        .verify_otp(VerifyOtpParam::from_dto(payload))
        .await?;

    let cookie = session_cookie(
        &login.session.token,
        state.config.session_ttl,
        state.config.secure_cookies,
    );

    Ok(([(header::SET_COOKIE, cookie)], Json(login.into_dto())))
}

/// Ends the current session and clears the session cookie.
///
/// Succeeds whether or not the request carried a live session.
///
/// # Returns
/// - `204 No Content` - Logged out
/// - `500 Internal Server Error` - Database error
pub async fn logout(
    State(state): State<AppState>,
    session_id: SessionId,
) -> Result<impl IntoResponse, AppError> {
    auth_service(&state).logout(session_id.as_deref()).await?;

    Ok((
        StatusCode::NO_CONTENT,
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.config.secure_cookies),
        )],
    ))
}

/// Returns the logged-in user.
///
/// # Returns
/// - `200 OK` - `UserDto`
/// - `401 Unauthorized` - No session, unknown session, or expired session
pub async fn get_user(
    State(state): State<AppState>,
    session_id: SessionId,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, session_id.as_deref())
        .require()
        .await?;

    Ok(Json(user.into_dto()))
}
