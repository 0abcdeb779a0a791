//! Builders for HTTP state backed by the configured repository.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use employee_service::domain::ports::EmployeeRepository;
use employee_service::inbound::http::state::HttpState;
use employee_service::outbound::memory::InMemoryEmployeeRepository;
use employee_service::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

/// Select the employee repository for `config`.
///
/// Uses PostgreSQL when a pool is configured and falls back to the volatile
/// in-memory store otherwise.
pub fn build_repository(config: &ServerConfig) -> Arc<dyn EmployeeRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL employee store");
            Arc::new(DieselEmployeeRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; employee records will not survive a restart");
            Arc::new(InMemoryEmployeeRepository::new())
        }
    }
}

/// Build shared HTTP state wrapping the configured repository.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(build_repository(config)))
}
