//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::EmployeeRepository;
use crate::outbound::memory::InMemoryEmployeeRepository;

use super::api_scope;
use super::state::HttpState;

/// Build the employee API the way the server does, around `state`.
pub fn employee_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}

/// State backed by a fresh in-memory repository.
pub fn in_memory_state() -> HttpState {
    let repository: Arc<dyn EmployeeRepository> = Arc::new(InMemoryEmployeeRepository::new());
    HttpState::from_repository(repository)
}
