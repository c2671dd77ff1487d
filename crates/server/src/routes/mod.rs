pub mod course;
pub mod health;
pub mod root;
pub mod student;
