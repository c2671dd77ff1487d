pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use crate::{
    doc::ApiDoc,
    routes::{course, health, root, student},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with all API routes and the Swagger UI
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route(
            "/api/courses",
            get(course::list_courses).post(course::create_course),
        )
        .route(
            "/api/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/api/courses/{id}/active", put(course::set_course_active))
        .route(
            "/api/students",
            get(student::list_students).post(student::create_student),
        )
        .route(
            "/api/students/{id}",
            get(student::get_student_by_id)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route("/api/students/{id}/course", put(student::assign_course))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
