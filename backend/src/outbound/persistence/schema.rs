//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Employee records.
    ///
    /// `created_at` orders listings; `updated_at` is refreshed on every
    /// replacement.
    employees (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Employee name.
        name -> Varchar,
        /// Job title.
        position -> Varchar,
        /// Owning department.
        department -> Varchar,
        /// Whole-unit salary, never negative.
        salary -> Int8,
        /// Calendar hire date.
        date_of_hire -> Date,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last replacement timestamp.
        updated_at -> Timestamptz,
    }
}
