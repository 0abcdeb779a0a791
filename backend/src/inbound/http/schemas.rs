//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. These
//! wrappers mirror the JSON shape of their domain counterparts and exist only
//! for documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = Employee, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EmployeeSchema {
    /// Store-assigned identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: uuid::Uuid,
    /// Employee name.
    #[schema(example = "Ann")]
    name: String,
    /// Job title.
    #[schema(example = "Eng")]
    position: String,
    /// Owning department.
    #[schema(example = "R&D")]
    department: String,
    /// Whole-unit salary.
    #[schema(minimum = 0, example = 50000)]
    salary: i64,
    /// Calendar hire date.
    #[schema(example = "2022-01-10")]
    date_of_hire: chrono::NaiveDate,
}

/// OpenAPI schema for the create and update request body.
///
/// The validator also accepts numeric strings for `salary` and ISO-8601
/// date-times for `dateOfHire`.
#[derive(ToSchema)]
#[schema(as = EmployeeInput, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EmployeeInputSchema {
    /// Required, non-empty.
    #[schema(example = "Ann")]
    name: String,
    /// Required, non-empty.
    #[schema(example = "Eng")]
    position: String,
    /// Required, non-empty.
    #[schema(example = "R&D")]
    department: String,
    /// Required integer, zero or greater.
    #[schema(minimum = 0, example = 50000)]
    salary: i64,
    /// Required ISO-8601 date.
    #[schema(example = "2022-01-10")]
    date_of_hire: chrono::NaiveDate,
}

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested employee does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The store failed or another unexpected error occurred.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::FieldError`].
#[derive(ToSchema)]
#[schema(as = FieldError)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FieldErrorSchema {
    /// JSON key of the rejected field.
    #[schema(example = "salary")]
    field: String,
    /// Why the value was rejected.
    #[schema(example = "Salary must be a positive integer")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Employee not found")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Per-field failures, present only for validation errors.
    errors: Option<Vec<FieldErrorSchema>>,
}

#[cfg(test)]
mod tests {
    use utoipa::PartialSchema;

    use super::*;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn employee_schema_uses_camel_case() {
        let schema_json = schema_to_json::<EmployeeSchema>();
        assert_eq!(EmployeeSchema::name(), "Employee");
        assert!(schema_json.contains("dateOfHire"), "missing dateOfHire");
        assert!(!schema_json.contains("date_of_hire"), "snake_case leaked");
    }

    #[test]
    fn error_schema_lists_optional_fields() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"), "missing traceId");
        assert!(schema_json.contains("errors"), "missing errors");
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }
}
