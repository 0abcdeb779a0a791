//! Internal Diesel row types for the `employees` table.
//!
//! These structs never leave the persistence module; the repository converts
//! them to and from domain values.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::schema::employees;

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: i64,
    pub date_of_hire: NaiveDate,
    #[expect(dead_code, reason = "ordering column, not part of the record")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "audit column, not part of the record")]
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let details = EmployeeDraft::from_storage(
            row.name,
            row.position,
            row.department,
            row.salary,
            row.date_of_hire,
        );
        Self::new(EmployeeId::from_uuid(row.id), details)
    }
}

/// Insertable struct for creating employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub position: &'a str,
    pub department: &'a str,
    pub salary: i64,
    pub date_of_hire: NaiveDate,
}

impl<'a> NewEmployeeRow<'a> {
    pub fn new(id: Uuid, draft: &'a EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name(),
            position: draft.position(),
            department: draft.department(),
            salary: draft.salary(),
            date_of_hire: draft.date_of_hire(),
        }
    }
}

/// Changeset replacing every mutable column of a record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChangeset<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub department: &'a str,
    pub salary: i64,
    pub date_of_hire: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl<'a> EmployeeChangeset<'a> {
    pub fn replacing_with(draft: &'a EmployeeDraft, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: draft.name(),
            position: draft.position(),
            department: draft.department(),
            salary: draft.salary(),
            date_of_hire: draft.date_of_hire(),
            updated_at,
        }
    }
}
