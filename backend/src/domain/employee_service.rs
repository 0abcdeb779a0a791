//! Employee domain services.
//!
//! These services implement the employee driving ports on top of an
//! [`EmployeeRepository`]. Update and delete check for existence before
//! acting; the two steps are not atomic, so a concurrent delete can turn a
//! successful lookup into a `NotFound` on the write.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    EmployeeCommand, EmployeePersistenceError, EmployeeQuery, EmployeeRepository,
};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Message returned when an identifier does not match a stored record.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

fn map_repository_error(err: EmployeePersistenceError) -> Error {
    error!(error = %err, "employee repository failure");
    Error::internal(err.message())
}

fn not_found() -> Error {
    Error::not_found(EMPLOYEE_NOT_FOUND)
}

/// Employee service implementing the command driving port.
pub struct EmployeeCommandService<R: ?Sized> {
    employee_repo: Arc<R>,
}

impl<R: ?Sized> EmployeeCommandService<R> {
    /// Create a new command service with the employee repository.
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

impl<R: ?Sized> Clone for EmployeeCommandService<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.employee_repo))
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeCommandService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn create(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.employee_repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: &EmployeeId, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)?;

        self.employee_repo
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)?;

        let removed = self
            .employee_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if removed { Ok(()) } else { Err(not_found()) }
    }
}

/// Employee service implementing the query driving port.
pub struct EmployeeQueryService<R: ?Sized> {
    employee_repo: Arc<R>,
}

impl<R: ?Sized> EmployeeQueryService<R> {
    /// Create a new query service with the employee repository.
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

impl<R: ?Sized> Clone for EmployeeQueryService<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.employee_repo))
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeQueryService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn list(&self) -> Result<Vec<Employee>, Error> {
        self.employee_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
