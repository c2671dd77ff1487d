use database::entities::courses;
use models::course::CourseFields;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub workload_hours: i32,
    pub exercise_count: i32,
    pub active: bool,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            workload_hours: course.workload_hours,
            exercise_count: course.exercise_count,
            active: course.active,
        }
    }
}

/// Body of a course update. Unknown fields, including `active`, are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseRequest {
    pub title: String,
    pub description: String,
    pub workload_hours: i32,
    pub exercise_count: i32,
}

impl From<CourseRequest> for CourseFields {
    fn from(request: CourseRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            workload_hours: request.workload_hours,
            exercise_count: request.exercise_count,
        }
    }
}

/// Body of a course creation
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[serde(flatten)]
    pub course: CourseRequest,

    /// Required on creation, but not stored
    pub extra_field: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActiveQuery {
    /// New value of the active flag
    pub active: bool,
}
