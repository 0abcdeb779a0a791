//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every employee endpoint and the health probes, plus
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and is printed by the `openapi-dump`
//! binary.

use crate::inbound::http::schemas::{
    EmployeeInputSchema, EmployeeSchema, ErrorCodeSchema, ErrorSchema, FieldErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the employee REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee service API",
        description = "Create, list, fetch, replace, and delete employee records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeSchema,
        EmployeeInputSchema,
        ErrorSchema,
        ErrorCodeSchema,
        FieldErrorSchema
    )),
    tags(
        (name = "employees", description = "Employee record management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure and path registration.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_has_field(schema: &RefOr<Schema>, field: &str) -> bool {
        matches!(schema, RefOr::T(Schema::Object(obj)) if obj.properties.contains_key(field))
    }

    #[rstest]
    #[case("Employee", &["id", "name", "position", "department", "salary", "dateOfHire"])]
    #[case("EmployeeInput", &["name", "position", "department", "salary", "dateOfHire"])]
    #[case("Error", &["code", "message", "traceId", "errors"])]
    #[case("FieldError", &["field", "message"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        for field in fields {
            assert!(object_has_field(schema, field), "{name} should have '{field}'");
        }
    }

    #[rstest]
    #[case("/api/employees")]
    #[case("/api/employees/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn employee_item_path_has_three_operations() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/employees/{id}")
            .expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
