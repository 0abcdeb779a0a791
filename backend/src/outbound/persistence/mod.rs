//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides [`DieselEmployeeRepository`], a thin adapter translating between
//! Diesel row structs and domain employee values, plus the `bb8` connection
//! pool and the embedded schema migrations it depends on. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay internal.
//!
//! # Example
//!
//! ```no_run
//! use employee_service::outbound::persistence::{
//!     DbPool, DieselEmployeeRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/employees";
//! run_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselEmployeeRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_employee_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
