use axum::http::StatusCode;

/// Identifies the service and its version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, String) {
    (
        StatusCode::OK,
        format!("Course Enrollment API {}", env!("CARGO_PKG_VERSION")),
    )
}
