use async_trait::async_trait;

use crate::domain::employee::models::EmployeeId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::NewTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;

/// Port for task domain service operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a task owned by an employee.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - Owner does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_task(
        &self,
        employee_id: EmployeeId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn get_task(&self, id: TaskId) -> Result<Task, TaskError>;

    /// Every task, possibly none.
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// Apply a partial update, possibly moving the task to another employee.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `EmployeeNotFound` - New owner does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_task(&self, id: TaskId, command: UpdateTaskCommand)
        -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete_task(&self, id: TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for tasks.
///
/// Missing rows answer `None` / `false`, never an error.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn create(&self, task: NewTask) -> Result<Task, TaskError>;

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;

    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    async fn list_by_employee(&self, employee_id: EmployeeId) -> Result<Vec<Task>, TaskError>;

    async fn update(&self, task: Task) -> Result<Option<Task>, TaskError>;

    async fn delete(&self, id: TaskId) -> Result<bool, TaskError>;
}
