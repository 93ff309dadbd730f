use std::sync::Arc;

use employee_service::config::Config;
use employee_service::domain::auth::service::AuthService;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::domain::task::service::TaskService;
use employee_service::inbound::http::router::create_router;
use employee_service::outbound::repositories::SqliteEmployeeRepository;
use employee_service::outbound::repositories::SqliteTaskRepository;
use employee_service::outbound::repositories::MIGRATOR;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "employee-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        jwt = ?config.jwt,
        "Configuration loaded"
    );

    // Refuse to start rather than sign tokens with a missing or non-HMAC key.
    let authenticator = Arc::new(config.jwt.authenticator()?);

    let connect_options = config
        .database
        .url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);
    let sqlite_pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    MIGRATOR.run(&sqlite_pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let employee_repository = Arc::new(SqliteEmployeeRepository::new(sqlite_pool.clone()));
    let task_repository = Arc::new(SqliteTaskRepository::new(sqlite_pool));

    let employee_service = Arc::new(EmployeeService::new(
        Arc::clone(&employee_repository),
        Arc::clone(&task_repository),
    ));
    let task_service = Arc::new(TaskService::new(
        Arc::clone(&task_repository),
        Arc::clone(&employee_repository),
    ));
    let auth_service = Arc::new(AuthService::new(employee_repository, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(employee_service, task_service, auth_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
