//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`EmployeeRepository`]) describe what the domain needs from
//! storage adapters and expose typed errors. Driving ports
//! ([`EmployeeCommand`], [`EmployeeQuery`]) describe the use cases inbound
//! adapters call and speak the domain [`Error`](crate::domain::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod employee_command;
mod employee_query;
mod employee_repository;

pub use employee_command::EmployeeCommand;
#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_query::EmployeeQuery;
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
