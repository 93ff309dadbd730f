use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::employee::models::EmployeeId;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::task_title;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    let employee_id = EmployeeId::from_string(&employee_id).map_err(TaskError::from)?;
    let command = CreateTaskCommand {
        title: task_title(body.title)?,
        description: body.description,
    };

    state
        .task_service
        .create_task(employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|task| ApiSuccess::new(StatusCode::CREATED, (&task).into()))
}

/// HTTP request body for assigning a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    title: String,
    #[serde(default)]
    description: String,
}
