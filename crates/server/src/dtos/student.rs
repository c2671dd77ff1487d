use crate::dtos::course::CourseResponse;
use database::services::student::StudentWithCourse;
use models::student::StudentFields;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub cpf: String,
    pub course: Option<CourseResponse>,
}

impl From<StudentWithCourse> for StudentResponse {
    fn from((student, course): StudentWithCourse) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            age: student.age,
            cpf: student.cpf,
            course: course.map(CourseResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub cpf: String,
}

impl From<StudentRequest> for StudentFields {
    fn from(request: StudentRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            age: request.age,
            cpf: request.cpf,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignCourseRequest {
    /// Course to enroll the student in, or `null` to unenroll
    pub course_id: Option<i32>,
}
