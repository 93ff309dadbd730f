use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use http::header::WWW_AUTHENTICATE;
use http::HeaderValue;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;

pub mod create_employee;
pub mod create_task;
pub mod delete_employee;
pub mod delete_task;
pub mod get_current_employee;
pub mod get_employee;
pub mod get_task;
pub mod issue_token;
pub mod list_employees;
pub mod list_tasks;
pub mod update_employee;
pub mod update_task;

/// Answer to a failed login, whichever of email or password was wrong.
pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";

/// Answer to any rejected bearer token.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let mut response =
            (status, Json(ApiResponseBody::new_error(status, message))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::BadCredentials => ApiError::Unauthorized(INCORRECT_CREDENTIALS.to_string()),
            AuthError::InvalidToken(_) | AuthError::UnknownSubject(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            AuthError::Store(_) | AuthError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            EmployeeError::InvalidEmployeeId(_)
            | EmployeeError::InvalidName(_)
            | EmployeeError::InvalidEmail(_)
            | EmployeeError::InvalidAge(_)
            | EmployeeError::InvalidWorkingHours(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            EmployeeError::Password(_)
            | EmployeeError::DatabaseError(_)
            | EmployeeError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) | TaskError::EmployeeNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            TaskError::InvalidTaskId(_)
            | TaskError::InvalidEmployeeId(_)
            | TaskError::EmptyTitle => ApiError::UnprocessableEntity(err.to_string()),
            TaskError::DatabaseError(_) | TaskError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Confirmation of a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

/// Public view of an employee. Built field by field; there is no hash field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeData {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: u32,
    pub working_hours: u32,
    pub tasks: Vec<TaskData>,
}

impl EmployeeData {
    fn with_tasks(employee: &Employee, tasks: &[Task]) -> Self {
        Self {
            id: employee.id.0,
            name: employee.name.as_str().to_string(),
            surname: employee.surname.as_str().to_string(),
            email: employee.email.as_str().to_string(),
            age: employee.age,
            working_hours: employee.working_hours,
            tasks: tasks.iter().map(TaskData::from).collect(),
        }
    }
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self::with_tasks(employee, &[])
    }
}

impl From<&EmployeeDetails> for EmployeeData {
    fn from(details: &EmployeeDetails) -> Self {
        Self::with_tasks(&details.employee, &details.tasks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub employee_id: i64,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.clone(),
            description: task.description.clone(),
            employee_id: task.employee_id.0,
        }
    }
}
