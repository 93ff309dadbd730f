use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::NewTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
pub struct TaskService<TR, ER>
where
    TR: TaskRepository,
    ER: EmployeeRepository,
{
    repository: Arc<TR>,
    employee_repository: Arc<ER>,
}

impl<TR, ER> TaskService<TR, ER>
where
    TR: TaskRepository,
    ER: EmployeeRepository,
{
    /// Create a new task service.
    ///
    /// # Arguments
    /// * `repository` - Task persistence implementation
    /// * `employee_repository` - Used to check that task owners exist
    pub fn new(repository: Arc<TR>, employee_repository: Arc<ER>) -> Self {
        Self {
            repository,
            employee_repository,
        }
    }

    async fn ensure_employee_exists(&self, employee_id: EmployeeId) -> Result<(), TaskError> {
        self.employee_repository
            .find_by_id(employee_id)
            .await?
            .map(|_| ())
            .ok_or(TaskError::EmployeeNotFound(employee_id))
    }
}

#[async_trait]
impl<TR, ER> TaskServicePort for TaskService<TR, ER>
where
    TR: TaskRepository,
    ER: EmployeeRepository,
{
    async fn create_task(
        &self,
        employee_id: EmployeeId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        self.ensure_employee_exists(employee_id).await?;

        let task = self
            .repository
            .create(NewTask {
                title: command.title,
                description: command.description,
                employee_id,
            })
            .await?;
        tracing::info!(task_id = %task.id, employee_id = %employee_id, "Task created");

        Ok(task)
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.list_all().await
    }

    async fn update_task(
        &self,
        id: TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        if let Some(new_owner) = command.employee_id {
            self.ensure_employee_exists(new_owner).await?;
        }

        command.apply_to(&mut task);

        let updated = self
            .repository
            .update(task)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        tracing::info!(task_id = %id, "Task updated");

        Ok(updated)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), TaskError> {
        if !self.repository.delete(id).await? {
            return Err(TaskError::NotFound(id));
        }
        tracing::info!(task_id = %id, "Task deleted");

        Ok(())
    }
}
