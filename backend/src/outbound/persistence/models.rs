//! Diesel row structs for the `accounts` table.
//!
//! Internal to the persistence layer; the repository maps rows onto domain
//! types before anything crosses the port boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::accounts;

/// Full account row as read from the database.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    pub id: Uuid,
    pub full_name: String,
    pub department: String,
    pub employee_id: String,
    pub mobile_number: String,
    pub company_email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable payload for a new account.
///
/// The identity is generated by the adapter at insert time; `created_at`
/// defaults in the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub department: &'a str,
    pub employee_id: &'a str,
    pub mobile_number: &'a str,
    pub company_email: &'a str,
    pub password_hash: &'a str,
}
