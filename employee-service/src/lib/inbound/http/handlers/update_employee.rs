use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::non_negative;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for patching an employee (raw JSON)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i64>,
    pub working_hours: Option<i64>,
}

impl UpdateEmployeeRequest {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, EmployeeError> {
        Ok(UpdateEmployeeCommand {
            name: self.name.map(PersonName::new).transpose()?,
            surname: self.surname.map(PersonName::new).transpose()?,
            age: self
                .age
                .map(|age| non_negative(age, EmployeeError::InvalidAge))
                .transpose()?,
            working_hours: self
                .working_hours
                .map(|hours| non_negative(hours, EmployeeError::InvalidWorkingHours))
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEmployeeResponseData {
    pub message: String,
    pub employee: EmployeeData,
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<ApiSuccess<UpdateEmployeeResponseData>, ApiError> {
    let employee_id = EmployeeId::from_string(&id).map_err(EmployeeError::from)?;
    let command = req.try_into_command()?;

    state
        .employee_service
        .update_employee(employee_id, command)
        .await
        .map_err(ApiError::from)
        .map(|details| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdateEmployeeResponseData {
                    message: "Employee updated successfully".to_string(),
                    employee: (&details).into(),
                },
            )
        })
}
