use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use employee_service::domain::auth::service::AuthService;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::domain::task::service::TaskService;
use employee_service::inbound::http::router::create_router;
use employee_service::outbound::repositories::SqliteEmployeeRepository;
use employee_service::outbound::repositories::SqliteTaskRepository;
use employee_service::outbound::repositories::MIGRATOR;
use serde_json::json;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "pass_word!";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application over a private in-memory database
    pub async fn spawn() -> Self {
        // One connection kept forever: an in-memory database lives and dies with it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let employee_repository = Arc::new(SqliteEmployeeRepository::new(pool.clone()));
        let task_repository = Arc::new(SqliteTaskRepository::new(pool.clone()));

        let authenticator = Arc::new(Authenticator::new(
            JwtHandler::new(TEST_SECRET).expect("Failed to create JWT handler"),
            chrono::Duration::minutes(30),
        ));

        let employee_service = Arc::new(EmployeeService::new(
            Arc::clone(&employee_repository),
            Arc::clone(&task_repository),
        ));
        let task_service = Arc::new(TaskService::new(
            task_repository,
            Arc::clone(&employee_repository),
        ));
        let auth_service = Arc::new(AuthService::new(employee_repository, authenticator));

        let router = create_router(employee_service, task_service, auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET).expect("Failed to create JWT handler"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an employee with `TEST_PASSWORD` and return its id
    pub async fn register(&self, email: &str) -> i64 {
        let response = self
            .post("/employees")
            .json(&json!({
                "name": "Ada",
                "surname": "Lovelace",
                "email": email,
                "password": TEST_PASSWORD,
                "age": 36,
                "working_hours": 40
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing employee id")
    }

    /// Request a token through the login form
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register an employee and log in as them
    pub async fn register_and_login(&self, email: &str) -> (i64, String) {
        let id = self.register(email).await;
        let body: Value = self
            .login(email, TEST_PASSWORD)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        let token = body["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string();
        (id, token)
    }
}
