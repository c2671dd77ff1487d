pub mod course;
pub mod student;

pub use course as courses;
pub use student as students;
