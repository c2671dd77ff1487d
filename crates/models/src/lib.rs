pub mod course;
pub mod student;
pub mod validation;
