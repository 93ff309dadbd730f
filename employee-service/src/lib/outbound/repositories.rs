use sqlx::migrate::Migrator;

pub mod employee;
pub mod task;

pub use employee::SqliteEmployeeRepository;
pub use task::SqliteTaskRepository;

/// Schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
