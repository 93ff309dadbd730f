use thiserror::Error;

use crate::domain::employee::models::EmployeeId;
use crate::domain::task::errors::TaskError;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Invalid employee id: {0}")]
    InvalidFormat(String),
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all employee-related operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Invalid employee ID: {0}")]
    InvalidEmployeeId(#[from] EmployeeIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Age must be a non-negative number, got {0}")]
    InvalidAge(i64),

    #[error("Working hours must be a non-negative number, got {0}")]
    InvalidWorkingHours(i64),

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Employee not found")]
    NotFound(EmployeeId),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<TaskError> for EmployeeError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::DatabaseError(msg) => EmployeeError::DatabaseError(msg),
            other => EmployeeError::Unknown(other.to_string()),
        }
    }
}
