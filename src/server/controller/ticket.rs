use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::PageQuery,
        ticket::{CreateTicketDto, TicketMessageDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::SessionId},
        model::{
            pagination::PageParam,
            ticket::{AddTicketMessageParam, CreateTicketParam},
        },
        pipe::{ContentPresencePipe, Pipe},
        service::ticket::TicketService,
        state::AppState,
        validation::ValidatedJson,
    },
};

/// Opens a support ticket with its first message.
///
/// # Access Control
/// - Logged-in user; the session is checked before the body is validated
///
/// # Arguments
/// - `payload` - `{ subject, content?, image? }`; needs either content or an image
///
/// # Returns
/// - `201 Created` - `TicketDetailDto` with the first message
/// - `400 Bad Request` - Invalid subject, or neither content nor image
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn create_ticket(
    State(state): State<AppState>,
    session_id: SessionId,
    payload: Result<ValidatedJson<CreateTicketDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, session_id.as_deref())
        .require()
        .await?;

    let ValidatedJson(payload) = payload?;
    let payload = ContentPresencePipe.transform(payload)?;

    let detail = TicketService::new(&state.db)
        .create(CreateTicketParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(detail.into_dto())))
}

/// Lists the logged-in user's tickets, newest first.
///
/// # Returns
/// - `200 OK` - Paginated `TicketDto` list
/// - `400 Bad Request` - `page` is too large
/// - `401 Unauthorized` - Not logged in
pub async fn get_tickets(
    State(state): State<AppState>,
    session_id: SessionId,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, session_id.as_deref())
        .require()
        .await?;

    let page = TicketService::new(&state.db)
        .list_for_user(user.id, PageParam::from_query(&query)?)
        .await?;

    Ok(Json(page.into_dto(|ticket| ticket.into_dto())))
}

/// Gets one of the logged-in user's tickets with its messages.
///
/// # Returns
/// - `200 OK` - `TicketDetailDto`, messages oldest first
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such ticket for this user
pub async fn get_ticket(
    State(state): State<AppState>,
    session_id: SessionId,
    Path(ticket_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, session_id.as_deref())
        .require()
        .await?;

    let detail = TicketService::new(&state.db)
        .get_for_user(user.id, ticket_id)
        .await?;

    Ok(Json(detail.into_dto()))
}

/// Posts a message on the logged-in user's ticket and reopens it.
///
/// # Returns
/// - `201 Created` - `TicketMessageViewDto`
/// - `400 Bad Request` - Neither content nor image, or the ticket is closed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such ticket for this user
pub async fn add_ticket_message(
    State(state): State<AppState>,
    session_id: SessionId,
    Path(ticket_id): Path<i32>,
    payload: Result<ValidatedJson<TicketMessageDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, session_id.as_deref())
        .require()
        .await?;

    let ValidatedJson(payload) = payload?;
    let payload = ContentPresencePipe.transform(payload)?;

    let message = TicketService::new(&state.db)
        .add_user_message(
            user.id,
            AddTicketMessageParam::from_dto(ticket_id, false, payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Closes the logged-in user's ticket.
///
/// # Returns
/// - `200 OK` - The closed `TicketDto`
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such ticket for this user
pub async fn close_ticket(
    State(state): State<AppState>,
    session_id: SessionId,
    Path(ticket_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, session_id.as_deref())
        .require()
        .await?;

    let ticket = TicketService::new(&state.db)
        .close(user.id, ticket_id)
        .await?;

    Ok(Json(ticket.into_dto()))
}
