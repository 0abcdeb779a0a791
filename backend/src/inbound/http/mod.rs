//! HTTP inbound adapter exposing the employee REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// JSON extractor configuration mapping body errors to `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// The `/api` scope with every employee route registered.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use employee_service::inbound::http::{api_scope, state::HttpState};
/// use employee_service::outbound::memory::InMemoryEmployeeRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(json_config())
        .service(employees::create_employee)
        .service(employees::list_employees)
        .service(employees::get_employee)
        .service(employees::update_employee)
        .service(employees::delete_employee)
}
