//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Domain use-case port for reading employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// List every employee, oldest first.
    async fn list(&self) -> Result<Vec<Employee>, Error>;

    /// Fetch one employee, failing with `NotFound` when absent.
    async fn get(&self, id: &EmployeeId) -> Result<Employee, Error>;
}
