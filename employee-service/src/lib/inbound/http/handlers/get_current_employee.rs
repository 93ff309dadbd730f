use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::domain::auth::models::Identity;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

/// The caller's own record, as resolved from their bearer token.
pub async fn get_current_employee(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    state
        .employee_service
        .get_employee(identity.id)
        .await
        .map_err(ApiError::from)
        .map(|details| ApiSuccess::new(StatusCode::OK, (&details).into()))
}
