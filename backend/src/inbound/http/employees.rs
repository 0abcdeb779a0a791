//! Employee HTTP handlers.
//!
//! ```text
//! POST   /api/employees
//! GET    /api/employees
//! GET    /api/employees/{id}
//! PUT    /api/employees/{id}
//! DELETE /api/employees/{id}
//! ```
//!
//! Bodies are validated here, before any use case runs, so a rejected body
//! never touches the store. Identifiers that are not UUIDs cannot name a
//! stored record and are answered with 404.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::{EMPLOYEE_NOT_FOUND, Employee, EmployeeDraft, EmployeeId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeeInputSchema, EmployeeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

fn parse_draft(body: &Value) -> Result<EmployeeDraft, Error> {
    EmployeeDraft::from_input(body).map_err(Error::validation)
}

fn parse_id(raw: &str) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|_| Error::not_found(EMPLOYEE_NOT_FOUND))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeInputSchema,
    responses(
        (status = 201, description = "Employee created", body = EmployeeSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(&payload)?;
    let employee = state.employees.create(draft).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List every employee, oldest first.
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeSchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees_query.list().await?;
    Ok(web::Json(employees))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Employee>> {
    let id = parse_id(&path)?;
    let employee = state.employees_query.get(&id).await?;
    Ok(web::Json(employee))
}

/// Replace every field of an employee.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    request_body = EmployeeInputSchema,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Employee>> {
    let draft = parse_draft(&payload)?;
    let id = parse_id(&path)?;
    let employee = state.employees.update(&id, draft).await?;
    Ok(web::Json(employee))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.employees.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
