//! Driving port for employee mutations.
//!
//! Inbound adapters validate request bodies into [`EmployeeDraft`] values
//! before calling this port, so every method here receives well-formed
//! input and only reports `NotFound` or `InternalError` failures.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Domain use-case port for creating, replacing, and removing employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Store a new employee and return it with its assigned identifier.
    async fn create(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Replace every field of an existing employee.
    async fn update(&self, id: &EmployeeId, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Remove an employee.
    async fn delete(&self, id: &EmployeeId) -> Result<(), Error>;
}
