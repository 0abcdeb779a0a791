//! In-process employee repository.
//!
//! Records live in a `Vec` behind a [`RwLock`], so listing order is insertion
//! order and each port method runs inside a single critical section. Used
//! when no database URL is configured and as the store behind HTTP tests.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

/// Volatile employee store; contents are lost when the process exits.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use employee_service::domain::EmployeeDraft;
/// use employee_service::domain::ports::EmployeeRepository;
/// use employee_service::outbound::memory::InMemoryEmployeeRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryEmployeeRepository::default();
/// let hired = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
/// let draft = EmployeeDraft::try_new("Ann", "Eng", "R&D", 50_000, hired).unwrap();
/// let created = repo.insert(&draft).await.unwrap();
/// assert_eq!(repo.find_by_id(created.id()).await.unwrap(), Some(created));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> EmployeePersistenceError {
    EmployeePersistenceError::connection("in-memory employee store lock poisoned")
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeePersistenceError> {
        let employee = Employee::new(EmployeeId::random(), draft.clone());
        let mut records = self.records.write().map_err(poisoned)?;
        records.push(employee.clone());
        Ok(employee)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|employee| employee.id() == id).cloned())
    }

    async fn update(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut records = self.records.write().map_err(poisoned)?;
        let Some(slot) = records.iter_mut().find(|employee| employee.id() == id) else {
            return Ok(None);
        };
        *slot = slot.replaced_with(draft.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeePersistenceError> {
        let mut records = self.records.write().map_err(poisoned)?;
        let before = records.len();
        records.retain(|employee| employee.id() != id);
        Ok(records.len() < before)
    }
}
