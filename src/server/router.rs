use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{admin, auth, health, horse, ticket},
    middleware::api_key::require_api_key,
    state::AppState,
};

/// Builds the application router with every route and its state.
///
/// Admin routes are nested under `/api/admin` behind the API key gate. Other routes
/// are public or resolve the session in their handlers.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/horses", post(admin::create_horse))
        .route(
            "/horses/{id}",
            put(admin::update_horse).delete(admin::delete_horse),
        )
        .route("/tickets", get(admin::get_all_tickets))
        .route("/tickets/{id}", get(admin::get_ticket))
        .route("/tickets/{id}/messages", post(admin::reply_to_ticket))
        .route_layer(from_fn_with_state(
            state.api_key_gate.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/otp/request", post(auth::request_otp))
        .route("/api/auth/otp/verify", post(auth::verify_otp))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/horses", get(horse::get_horses))
        .route("/api/horses/{url}", get(horse::get_horse))
        .route(
            "/api/tickets",
            post(ticket::create_ticket).get(ticket::get_tickets),
        )
        .route("/api/tickets/{id}", get(ticket::get_ticket))
        .route(
            "/api/tickets/{id}/messages",
            post(ticket::add_ticket_message),
        )
        .route("/api/tickets/{id}/close", post(ticket::close_ticket))
        .nest("/api/admin", admin_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
