//! Port abstraction for employee persistence adapters and their errors.
//!
//! The repository is the Store: an ordered-by-creation collection of
//! employee records addressed by [`EmployeeId`]. Absence is reported as a
//! value (`None`/`false`), never as an error; errors are reserved for
//! storage faults.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeePersistenceError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied cause.
            message: String,
        } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied cause.
            message: String,
        } => "employee repository query failed: {message}",
    }
}

impl EmployeePersistenceError {
    /// Adapter-supplied cause, without the port's prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message } | Self::Query { message } => message,
        }
    }
}

/// Store contract for employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new record under a freshly assigned identifier.
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeePersistenceError>;

    /// Return every record exactly once, oldest first.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &EmployeeId)
    -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Replace all five fields of an existing record.
    ///
    /// Returns `None` when no record has this identifier.
    async fn update(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Remove a record, returning `false` when it did not exist.
    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeePersistenceError>;
}
