use crate::{
    dtos::{
        ErrorResponse,
        course::{ActiveQuery, CourseRequest, CourseResponse, CreateCourseRequest},
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{error::ServiceError, services::course::CourseService};

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created, always active", body = CourseResponse),
        (status = 422, description = "Invalid course fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course = CourseService::create(&state.db, request.course.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

/// List active courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Active courses", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = CourseService::find_active(&state.db).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get a course by ID, active or not
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::find_by_id(&state.db, id)
        .await?
        .ok_or(ServiceError::NotFound("Course"))?;
    Ok(Json(course.into()))
}

/// Replace a course's fields. The active flag is left unchanged.
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Invalid course fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::update(&state.db, id, request.into()).await?;
    Ok(Json(course.into()))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    CourseService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Activate or deactivate a course
#[utoipa::path(
    put,
    path = "/api/courses/{id}/active",
    params(
        ("id" = i32, Path, description = "Course ID"),
        ActiveQuery
    ),
    responses(
        (status = 200, description = "Active flag updated", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn set_course_active(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActiveQuery>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::set_active(&state.db, id, query.active).await?;
    Ok(Json(course.into()))
}
