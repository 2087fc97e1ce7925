use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::PageQuery,
    server::{
        error::AppError, model::pagination::PageParam, service::horse::HorseService,
        state::AppState,
    },
};

/// Lists gallery horses ordered by name.
///
/// # Arguments
/// - `query` - `page` (zero-based) and `perPage` (clamped to 1..=100)
///
/// # Returns
/// - `200 OK` - Paginated `HorseDto` list
/// - `400 Bad Request` - `page` is too large
/// - `500 Internal Server Error` - Database error
pub async fn get_horses(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = HorseService::new(&state.db)
        .list(PageParam::from_query(&query)?)
        .await?;

    Ok(Json(page.into_dto(|horse| horse.into_dto())))
}

/// Gets a horse by its page address. The address is matched case-insensitively.
///
/// # Returns
/// - `200 OK` - `HorseDto`
/// - `404 Not Found` - No horse at that address
pub async fn get_horse(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let horse = HorseService::new(&state.db).get_by_url(&url).await?;

    Ok(Json(horse.into_dto()))
}
