use crate::{
    dtos::{
        ErrorResponse,
        student::{AssignCourseRequest, StudentRequest, StudentResponse},
    },
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{error::ServiceError, services::student::StudentService};

/// Register a student
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student registered without a course", body = StudentResponse),
        (status = 400, description = "CPF or email already registered", body = ErrorResponse),
        (status = 422, description = "Invalid student fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = StudentService::create(&state.db, request.into()).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students with their courses", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = StudentService::find_all(&state.db).await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::find_by_id(&state.db, id)
        .await?
        .ok_or(ServiceError::NotFound("Student"))?;
    Ok(Json(student.into()))
}

/// Update a student's personal fields
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "CPF or email belongs to another student", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Invalid student fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<StudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::update(&state.db, id, request.into()).await?;
    Ok(Json(student.into()))
}

/// Enroll a student in a course, or unenroll it
#[utoipa::path(
    put,
    path = "/api/students/{id}/course",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = AssignCourseRequest,
    responses(
        (status = 200, description = "Enrollment updated", body = StudentResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn assign_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<AssignCourseRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = StudentService::assign_course(&state.db, id, request.course_id).await?;
    Ok(Json(student.into()))
}

/// Delete a student. Students enrolled in an active course cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Student is enrolled in an active course", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    StudentService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
