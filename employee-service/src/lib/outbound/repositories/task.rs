use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::employee::models::EmployeeId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::NewTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;

pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    description: String,
    employee_id: i64,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId(row.id),
            title: row.title,
            description: row.description,
            employee_id: EmployeeId(row.employee_id),
        }
    }
}

fn map_write_error(e: sqlx::Error, employee_id: EmployeeId) -> TaskError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return TaskError::EmployeeNotFound(employee_id);
        }
    }
    TaskError::DatabaseError(e.to_string())
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task, TaskError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, employee_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.employee_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, task.employee_id))?;

        Ok(task.with_id(TaskId(result.last_insert_rowid())))
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, employee_id FROM tasks WHERE id = ?",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Task::from))
        .map_err(|e| TaskError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, employee_id FROM tasks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn list_by_employee(&self, employee_id: EmployeeId) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, employee_id
            FROM tasks
            WHERE employee_id = ?
            ORDER BY id
            "#,
        )
        .bind(employee_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn update(&self, task: Task) -> Result<Option<Task>, TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, employee_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.employee_id.0)
        .bind(task.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, task.employee_id))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(task))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
