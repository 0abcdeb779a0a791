//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeCommand, EmployeeQuery, EmployeeRepository};
use crate::domain::{EmployeeCommandService, EmployeeQueryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update, and delete use cases.
    pub employees: Arc<dyn EmployeeCommand>,
    /// List and fetch use cases.
    pub employees_query: Arc<dyn EmployeeQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(employees: Arc<dyn EmployeeCommand>, employees_query: Arc<dyn EmployeeQuery>) -> Self {
        Self {
            employees,
            employees_query,
        }
    }

    /// Wire both driving ports to the domain services over one repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employee_service::inbound::http::state::HttpState;
    /// use employee_service::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
    /// let _query = state.employees_query.clone();
    /// ```
    pub fn from_repository(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::new(
            Arc::new(EmployeeCommandService::new(Arc::clone(&repository))),
            Arc::new(EmployeeQueryService::new(repository)),
        )
    }
}
