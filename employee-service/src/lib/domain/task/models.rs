use std::fmt;

use crate::domain::employee::models::EmployeeId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::errors::TaskIdError;

/// Task assigned to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub employee_id: EmployeeId,
}

/// Task unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Parse a task ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        s.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(TaskId)
            .ok_or_else(|| TaskIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty, trimmed task title.
pub fn task_title(title: String) -> Result<String, TaskError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        Err(TaskError::EmptyTitle)
    } else {
        Ok(title)
    }
}

/// Command to create a task for an employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskCommand {
    pub title: String,
    pub description: String,
}

/// Task ready to be persisted; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub employee_id: EmployeeId,
}

impl NewTask {
    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            employee_id: self.employee_id,
        }
    }
}

/// Partial update of a task. Only provided fields are applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateTaskCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub employee_id: Option<EmployeeId>,
}

impl UpdateTaskCommand {
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(employee_id) = self.employee_id {
            task.employee_id = employee_id;
        }
    }
}
