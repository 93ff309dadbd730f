use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TaskData>>, ApiError> {
    let tasks = state
        .task_service
        .list_tasks()
        .await
        .map_err(ApiError::from)?;

    if tasks.is_empty() {
        return Err(ApiError::NotFound("There are no tasks in table".to_string()));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        tasks.iter().map(TaskData::from).collect(),
    ))
}
