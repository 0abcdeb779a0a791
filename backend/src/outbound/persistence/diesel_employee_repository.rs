//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! Each port method issues exactly one statement, so every operation is
//! atomic on its own. Rows are converted to domain values without
//! re-validation; the table's constraints mirror the validator's rules.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeChangeset, EmployeeRow, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = EmployeeId::random();

        diesel::insert_into(employees::table)
            .values(NewEmployeeRow::new(*id.as_uuid(), draft))
            .returning(EmployeeRow::as_returning())
            .get_result::<EmployeeRow>(&mut conn)
            .await
            .map(Employee::from)
            .map_err(map_diesel_error)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order((employees::created_at.asc(), employees::id.asc()))
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        employees::table
            .find(id.as_uuid())
            .select(EmployeeRow::as_select())
            .first::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Employee::from))
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(employees::table.find(id.as_uuid()))
            .set(EmployeeChangeset::replacing_with(draft, Utc::now()))
            .returning(EmployeeRow::as_returning())
            .get_result::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Employee::from))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(employees::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map(|affected| affected > 0)
            .map_err(map_diesel_error)
    }
}
