use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_employee::create_employee;
use super::handlers::create_task::create_task;
use super::handlers::delete_employee::delete_employee;
use super::handlers::delete_task::delete_task;
use super::handlers::get_current_employee::get_current_employee;
use super::handlers::get_employee::get_employee;
use super::handlers::get_task::get_task;
use super::handlers::issue_token::issue_token;
use super::handlers::list_employees::list_employees;
use super::handlers::list_tasks::list_tasks;
use super::handlers::update_employee::update_employee;
use super::handlers::update_task::update_task;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::employee::service::EmployeeService;
use crate::domain::task::service::TaskService;
use crate::outbound::repositories::SqliteEmployeeRepository;
use crate::outbound::repositories::SqliteTaskRepository;

pub type SqliteEmployeeService = EmployeeService<SqliteEmployeeRepository, SqliteTaskRepository>;
pub type SqliteTaskService = TaskService<SqliteTaskRepository, SqliteEmployeeRepository>;
pub type SqliteAuthService = AuthService<SqliteEmployeeRepository>;

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<SqliteEmployeeService>,
    pub task_service: Arc<SqliteTaskService>,
    pub auth_service: Arc<SqliteAuthService>,
}

pub fn create_router(
    employee_service: Arc<SqliteEmployeeService>,
    task_service: Arc<SqliteTaskService>,
    auth_service: Arc<SqliteAuthService>,
) -> Router {
    let state = AppState {
        employee_service,
        task_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/token", post(issue_token))
        .route("/employees", post(create_employee));

    let protected_routes = Router::new()
        .route("/employees", get(list_employees))
        .route("/employees/me", get(get_current_employee))
        .route(
            "/employees/:employee_id",
            get(get_employee)
                .patch(update_employee)
                .delete(delete_employee),
        )
        .route("/employees/:employee_id/tasks", post(create_task))
        .route("/tasks", get(list_tasks))
        .route(
            "/tasks/:task_id",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
