//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation. Regenerate with
//! `diesel print-schema` when migrations change.

diesel::table! {
    /// Employee accounts table.
    ///
    /// `company_email` and `employee_id` carry unique constraints; the
    /// constraint names are part of the adapter's error-mapping contract.
    accounts (id) {
        /// Primary key: UUID v4 assigned on insert.
        id -> Uuid,
        /// Employee's full name.
        full_name -> Varchar,
        /// Department the employee belongs to.
        department -> Varchar,
        /// Unique employee identifier.
        employee_id -> Varchar,
        /// Contact mobile number (non-unique, indexed).
        mobile_number -> Varchar,
        /// Unique company email address.
        company_email -> Varchar,
        /// Argon2 password digest; never plaintext.
        password_hash -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
