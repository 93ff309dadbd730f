use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;

    state
        .employee_service
        .delete_employee(employee_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData {
                    message: "Employee deleted successfully".to_string(),
                },
            )
        })
}
