use crate::validation::{ValidationError, check_non_negative, check_text};
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// The replaceable fields of a course.
///
/// The active flag is deliberately absent: it starts out `true` and is only
/// changed through the dedicated toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub workload_hours: i32,
    pub exercise_count: i32,
}

impl CourseFields {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("title", &self.title, TITLE_MAX_LEN, true)?;
        check_text("description", &self.description, DESCRIPTION_MAX_LEN, false)?;
        check_non_negative("workload_hours", self.workload_hours)?;
        check_non_negative("exercise_count", self.exercise_count)?;
        Ok(())
    }
}
