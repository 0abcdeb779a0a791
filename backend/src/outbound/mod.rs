//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed employee repository using Diesel ORM.
//! - **memory**: in-process employee repository used when no database is
//!   configured and by the HTTP tests.
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
