//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: this layer translates between Diesel rows and domain
//! types and maps database errors onto the gateway error taxonomy. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay internal;
//! the domain never sees them. Connections come from a `bb8` pool via
//! `diesel-async`.

mod diesel_account_repository;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
