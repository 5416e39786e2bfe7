//! Driving port for the account workflow.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register and authenticate accounts without knowing (or importing) the
//! backing infrastructure, which keeps handler tests deterministic.

use async_trait::async_trait;

use crate::domain::account::Account;
use crate::domain::auth::LoginCredentials;
use crate::domain::registration::RegistrationCandidate;

use super::account_repository::AccountPersistenceError;
use super::password_hasher::PasswordHashError;

/// Typed registration outcomes.
///
/// The first three variants are the expected, caller-recoverable failures in
/// their documented precedence order; the remaining two carry unclassified
/// collaborator faults through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Another account already uses the candidate's company email.
    #[error("company email already registered")]
    DuplicateEmail,
    /// Another account already uses the candidate's employee id.
    #[error("employee id already registered")]
    DuplicateEmployeeId,
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// Credential store fault not anticipated by the pre-checks.
    #[error(transparent)]
    Repository(AccountPersistenceError),
    /// Hashing primitive fault.
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),
}

/// Typed authentication outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    /// No account matches the identifier against either unique field.
    #[error("no account matches the supplied identifier")]
    NotFound,
    /// The password does not verify against the stored digest.
    #[error("invalid password")]
    InvalidPassword,
    /// Credential store fault.
    #[error(transparent)]
    Repository(#[from] AccountPersistenceError),
    /// Hashing primitive fault.
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),
}

/// Domain use-case port for registration and authentication.
#[async_trait]
pub trait AccountWorkflow: Send + Sync {
    /// Run the ordered registration checks, then hash, save and return the
    /// stored account.
    async fn register(
        &self,
        candidate: RegistrationCandidate,
    ) -> Result<Account, RegistrationError>;

    /// Resolve the identifier, verify the password and return the matched
    /// account.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Account, AuthenticationError>;
}
