use thiserror::Error;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::models::EmployeeId;
use crate::domain::task::models::TaskId;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("Invalid task id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(#[from] TaskIdError),

    #[error("Invalid employee ID: {0}")]
    InvalidEmployeeId(#[from] EmployeeIdError),

    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Task not found")]
    NotFound(TaskId),

    #[error("Employee not found")]
    EmployeeNotFound(EmployeeId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<EmployeeError> for TaskError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => TaskError::EmployeeNotFound(id),
            EmployeeError::DatabaseError(msg) => TaskError::DatabaseError(msg),
            other => TaskError::Unknown(other.to_string()),
        }
    }
}
