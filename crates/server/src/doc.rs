use crate::routes::{course, health, root, student};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::create_course,
        course::list_courses,
        course::get_course_by_id,
        course::update_course,
        course::delete_course,
        course::set_course_active,
        student::create_student,
        student::list_students,
        student::get_student_by_id,
        student::update_student,
        student::assign_course,
        student::delete_student
    ),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Courses", description = "Course related endpoints"),
        (name = "Students", description = "Student related endpoints"),
    ),
    info(
        title = "Course Enrollment API",
        version = "1.0.0",
        description = "Virtual learning environment backend for managing courses and enrolled students",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
