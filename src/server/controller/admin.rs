//! Admin endpoints for the gallery and ticket support.
//!
//! Every route here is mounted behind the API key gate (`middleware::api_key`), so
//! handlers do not check identity themselves.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::PageQuery,
        horse::{CreateHorseDto, UpdateHorseDto},
        ticket::TicketMessageDto,
    },
    server::{
        error::AppError,
        model::{
            horse::{CreateHorseParam, UpdateHorseParam},
            pagination::PageParam,
            ticket::AddTicketMessageParam,
        },
        pipe::{ContentPresencePipe, Pipe, UrlSlugPipe},
        service::{horse::HorseService, ticket::TicketService},
        state::AppState,
        validation::ValidatedJson,
    },
};

/// Lists a new horse in the gallery.
///
/// # Arguments
/// - `payload` - `{ name, url?, description?, price }`; `url` is lowercased and must
///   contain only letters, digits and hyphens. An empty `url` is stored as none.
///
/// # Returns
/// - `201 Created` - `HorseDto`
/// - `400 Bad Request` - Field rules failed or the page address is invalid
/// - `401 Unauthorized` - Missing or wrong API key
/// - `409 Conflict` - Another horse already uses the page address
pub async fn create_horse(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateHorseDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = UrlSlugPipe.transform(payload)?;

    let horse = HorseService::new(&state.db)
        .create(CreateHorseParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(horse.into_dto())))
}

/// Edits a horse; absent fields keep their value and an empty `url` clears it.
///
/// # Returns
/// - `200 OK` - The updated `HorseDto`
/// - `400 Bad Request` - Field rules failed or the page address is invalid
/// - `404 Not Found` - No horse with that ID
/// - `409 Conflict` - Another horse already uses the page address
pub async fn update_horse(
    State(state): State<AppState>,
    Path(horse_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateHorseDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = UrlSlugPipe.transform(payload)?;

    let horse = HorseService::new(&state.db)
        .update(UpdateHorseParam::from_dto(horse_id, payload))
        .await?;

    Ok(Json(horse.into_dto()))
}

/// Removes a horse from the gallery.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - No horse with that ID
pub async fn delete_horse(
    State(state): State<AppState>,
    Path(horse_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    HorseService::new(&state.db).delete(horse_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists tickets from every user, newest first.
pub async fn get_all_tickets(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = TicketService::new(&state.db)
        .list_all(PageParam::from_query(&query)?)
        .await?;

    Ok(Json(page.into_dto(|ticket| ticket.into_dto())))
}

/// Gets any ticket with its messages.
///
/// # Returns
/// - `200 OK` - `TicketDetailDto`
/// - `404 Not Found` - No such ticket
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = TicketService::new(&state.db).get(ticket_id).await?;

    Ok(Json(detail.into_dto()))
}

/// Posts a support reply on a ticket and marks it answered.
///
/// # Returns
/// - `201 Created` - `TicketMessageViewDto` with `fromAdmin: true`
/// - `400 Bad Request` - Neither content nor image, or the ticket is closed
/// - `404 Not Found` - No such ticket
pub async fn reply_to_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<TicketMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = ContentPresencePipe.transform(payload)?;

    let message = TicketService::new(&state.db)
        .reply(AddTicketMessageParam::from_dto(ticket_id, true, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
