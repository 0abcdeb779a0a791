//! Diesel and pool error mapping for the employee repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeePersistenceError;

use super::pool::PoolError;

/// Pool failures mean no connection was obtained.
pub(super) fn map_pool_error(error: PoolError) -> EmployeePersistenceError {
    debug!(%error, "connection pool checkout failed");
    EmployeePersistenceError::connection(error.message())
}

/// Map Diesel failures, keeping the database's own message where it has one.
pub(super) fn map_diesel_error(error: DieselError) -> EmployeePersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            EmployeePersistenceError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => EmployeePersistenceError::query(info.message()),
        DieselError::NotFound => EmployeePersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            EmployeePersistenceError::query("database query error")
        }
        other => EmployeePersistenceError::query(other.to_string()),
    }
}
