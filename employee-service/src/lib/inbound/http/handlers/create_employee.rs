use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::non_negative;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::EmailAddress;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    state
        .employee_service
        .create_employee(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|employee| ApiSuccess::new(StatusCode::CREATED, (&employee).into()))
}

/// HTTP request body for registering an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    name: String,
    surname: String,
    email: String,
    password: String,
    age: i64,
    working_hours: i64,
}

impl CreateEmployeeRequest {
    fn try_into_command(self) -> Result<CreateEmployeeCommand, EmployeeError> {
        Ok(CreateEmployeeCommand {
            name: PersonName::new(self.name)?,
            surname: PersonName::new(self.surname)?,
            email: EmailAddress::new(self.email)?,
            age: non_negative(self.age, EmployeeError::InvalidAge)?,
            working_hours: non_negative(self.working_hours, EmployeeError::InvalidWorkingHours)?,
            password: self.password,
        })
    }
}
