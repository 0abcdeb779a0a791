//! Employee record service library.
//!
//! Hexagonal layout: `domain` holds the employee model, validation, and the
//! use-case services; `inbound::http` adapts them to Actix handlers;
//! `outbound` provides the in-memory and PostgreSQL repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
