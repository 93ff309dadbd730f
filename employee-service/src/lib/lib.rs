pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::employee;
pub use domain::task;
pub use outbound::repositories;
