use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::employee::models::EmployeeId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::task_title;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for patching a task (raw JSON)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub employee_id: Option<i64>,
}

impl UpdateTaskRequest {
    fn try_into_command(self) -> Result<UpdateTaskCommand, TaskError> {
        let employee_id = self
            .employee_id
            .map(|id| EmployeeId::from_string(&id.to_string()))
            .transpose()?;

        Ok(UpdateTaskCommand {
            title: self.title.map(task_title).transpose()?,
            description: self.description,
            employee_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskResponseData {
    pub message: String,
    pub task: TaskData,
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<ApiSuccess<UpdateTaskResponseData>, ApiError> {
    let task_id = TaskId::from_string(&id).map_err(TaskError::from)?;
    let command = req.try_into_command()?;

    state
        .task_service
        .update_task(task_id, command)
        .await
        .map_err(ApiError::from)
        .map(|task| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdateTaskResponseData {
                    message: "Task updated successfully".to_string(),
                    task: (&task).into(),
                },
            )
        })
}
