//! Domain ports and supporting types for the hexagonal boundary.

mod account_repository;
mod account_workflow;
mod password_hasher;

pub use account_repository::{AccountPersistenceError, AccountRepository};
pub use account_workflow::{AccountWorkflow, AuthenticationError, RegistrationError};
pub use password_hasher::{FixturePasswordHasher, PasswordHashError, PasswordHasher};
