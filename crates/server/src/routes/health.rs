use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use log::error;

/// Returns "OK" when the service can reach its database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", content_type = "text/plain", body = String),
        (status = 500, description = "Database is unreachable")
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(err) => {
            error!("Health check failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable")
        }
    }
}
