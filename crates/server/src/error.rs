use crate::dtos::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use sea_orm::DbErr;

/// Handler error, rendered as `{ "error": ..., "message": ... }`
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(ServiceError::Database(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) | ServiceError::ActiveCourse => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Database(err) => {
                error!("Database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Never leak database details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(ErrorResponse {
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message,
        });

        (status, body).into_response()
    }
}
