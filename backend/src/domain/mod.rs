//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed employee model, the validator that turns
//! raw request bodies into it, and the use cases inbound adapters drive. Types
//! are immutable; invariants and serialisation contracts are documented on
//! each type.
//!
//! Public surface:
//! - `Employee`, `EmployeeDraft`, `EmployeeId`: the employee record.
//! - `validate_employee_input`, `FieldError`: request body validation.
//! - `Error`, `ErrorCode`: transport-agnostic failure payload.
//! - `EmployeeCommandService`, `EmployeeQueryService`: driving port
//!   implementations over an `EmployeeRepository`.
//! - `TraceId`: request correlation identifier.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    Employee, EmployeeDraft, EmployeeId, EmployeeIdError, FieldError, parse_iso8601_date,
    validate_employee_input,
};
pub use self::employee_service::{
    EMPLOYEE_NOT_FOUND, EmployeeCommandService, EmployeeQueryService,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
