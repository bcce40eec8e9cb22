// Employee Service - Core Library
// Exposes all modules for use in the admin CLI, the API server, and tests

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod repository;
pub mod service;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::{ServerArgs, ServerConfig};
pub use db::{load_csv, open_database, setup_database, verify_count};
pub use dto::EmployeeDto;
pub use entities::Employee;
pub use error::{Error, Result};
pub use repository::{
    EmployeeRepository, EmployeeStream, InMemoryEmployeeRepository, SqliteEmployeeRepository,
};
pub use service::{EmployeeDtoStream, EmployeeService};

#[cfg(feature = "server")]
pub use api::router;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
