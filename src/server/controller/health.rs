use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::HealthDto,
    server::{error::AppError, state::AppState},
};

/// Liveness check that also pings the database.
///
/// # Returns
/// - `200 OK` - `{ "status": "ok" }`
/// - `500 Internal Server Error` - The database is unreachable
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok(Json(HealthDto {
        status: "ok".to_string(),
    }))
}
