use models::validation::ValidationError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("student is enrolled in an active course and cannot be deleted")]
    ActiveCourse,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Reports a unique-constraint violation from a write as a conflict.
    ///
    /// Uniqueness is checked before writing, but two concurrent requests can
    /// both pass the check; the constraint catches the loser.
    pub(crate) fn from_write(err: DbErr, conflict: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(conflict.to_string()),
            _ => Self::Database(err),
        }
    }
}
