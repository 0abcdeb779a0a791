//! Employee record data model.
//!
//! [`EmployeeDraft`] is the validated payload supplied on create and update;
//! [`Employee`] pairs a draft with the store-assigned [`EmployeeId`]. Both are
//! immutable values: updates produce a fresh record rather than mutating a
//! stored one.
//!
//! Serialised JSON uses camelCase keys:
//! `{"id", "name", "position", "department", "salary", "dateOfHire"}`.

mod validation;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use validation::{FieldError, parse_iso8601_date, validate_employee_input};

/// Errors returned when parsing an [`EmployeeId`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeIdError {
    /// The identifier was an empty string.
    Empty,
    /// The identifier was not a valid UUID.
    Invalid,
}

impl fmt::Display for EmployeeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "employee id must not be empty"),
            Self::Invalid => write!(f, "employee id must be a valid UUID"),
        }
    }
}

impl std::error::Error for EmployeeIdError {}

/// Store-assigned employee identifier.
///
/// # Examples
/// ```
/// use employee_service::domain::EmployeeId;
///
/// let id = EmployeeId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(EmployeeId::new("42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Parse an identifier from its textual form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, EmployeeIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(EmployeeIdError::Empty);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| EmployeeIdError::Invalid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for EmployeeId {
    type Err = EmployeeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Validated employee payload without an identifier.
///
/// ## Invariants
/// - `name`, `position`, and `department` are non-empty.
/// - `salary` is non-negative.
///
/// Construct drafts with [`validate_employee_input`] for raw JSON or
/// [`EmployeeDraft::try_new`] for typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    name: String,
    position: String,
    department: String,
    salary: i64,
    date_of_hire: NaiveDate,
}

impl EmployeeDraft {
    /// Validate typed field values, collecting every violation.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use employee_service::domain::EmployeeDraft;
    ///
    /// let hired = NaiveDate::from_ymd_opt(2022, 1, 10).expect("valid date");
    /// let draft = EmployeeDraft::try_new("Ann", "Eng", "R&D", 50_000, hired).expect("valid");
    /// assert_eq!(draft.salary(), 50_000);
    ///
    /// let errors = EmployeeDraft::try_new("", "Eng", "", -1, hired).expect_err("invalid");
    /// assert_eq!(errors.len(), 3);
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        salary: i64,
        date_of_hire: NaiveDate,
    ) -> Result<Self, Vec<FieldError>> {
        let draft = Self::from_storage(
            name.into(),
            position.into(),
            department.into(),
            salary,
            date_of_hire,
        );
        let errors = draft.violations();
        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }

    /// Validate a raw JSON body; see [`validate_employee_input`].
    pub fn from_input(input: &serde_json::Value) -> Result<Self, Vec<FieldError>> {
        validate_employee_input(input)
    }

    /// Rebuild a draft from values that were validated before they were
    /// stored. Reads are not re-validated.
    pub(crate) fn from_storage(
        name: String,
        position: String,
        department: String,
        salary: i64,
        date_of_hire: NaiveDate,
    ) -> Self {
        Self {
            name,
            position,
            department,
            salary,
            date_of_hire,
        }
    }

    fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::new(validation::FIELD_NAME, validation::NAME_REQUIRED));
        }
        if self.position.is_empty() {
            errors.push(FieldError::new(
                validation::FIELD_POSITION,
                validation::POSITION_REQUIRED,
            ));
        }
        if self.department.is_empty() {
            errors.push(FieldError::new(
                validation::FIELD_DEPARTMENT,
                validation::DEPARTMENT_REQUIRED,
            ));
        }
        if self.salary < 0 {
            errors.push(FieldError::new(
                validation::FIELD_SALARY,
                validation::SALARY_INVALID,
            ));
        }
        errors
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job title.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Owning department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Whole-unit salary.
    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// Calendar date the employee was hired.
    pub fn date_of_hire(&self) -> NaiveDate {
        self.date_of_hire
    }
}

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    #[serde(flatten)]
    details: EmployeeDraft,
}

impl Employee {
    /// Pair a validated draft with its identifier.
    pub fn new(id: EmployeeId, details: EmployeeDraft) -> Self {
        Self { id, details }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// The record's field values.
    pub fn details(&self) -> &EmployeeDraft {
        &self.details
    }

    /// Return a record with the same identifier and every field replaced.
    #[must_use]
    pub fn replaced_with(&self, details: EmployeeDraft) -> Self {
        Self::new(self.id, details)
    }

    /// Split the record into identifier and field values.
    pub fn into_parts(self) -> (EmployeeId, EmployeeDraft) {
        (self.id, self.details)
    }
}

#[cfg(test)]
mod tests;
