//! Port abstraction for the credential store gateway and its errors.

use async_trait::async_trait;

use crate::domain::account::{Account, CompanyEmail, EmployeeId, NewAccount};

/// Persistence errors raised by credential store adapters.
///
/// The duplicate variants exist because the workflow's check-then-save
/// pattern leaves a race window: two concurrent registrations can both pass
/// the existence checks, and the store's uniqueness constraint rejects the
/// losing write. Adapters must surface that rejection as the matching
/// duplicate variant so the workflow can report it as an ordinary
/// registration failure instead of a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountPersistenceError {
    /// Store connection could not be established.
    #[error("credential store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("credential store query failed: {message}")]
    Query { message: String },
    /// A write was rejected by the unique constraint on company email.
    #[error("company email already registered")]
    DuplicateCompanyEmail,
    /// A write was rejected by the unique constraint on employee id.
    #[error("employee id already registered")]
    DuplicateEmployeeId,
}

impl AccountPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Credential store gateway.
///
/// Abstracts persistence of [`Account`] records behind a capability set
/// independent of the storage engine. All operations are single synchronous
/// reads/writes against the backing store; no caching layer sits in between.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Report whether any account already uses this company email.
    async fn exists_by_company_email(
        &self,
        email: &CompanyEmail,
    ) -> Result<bool, AccountPersistenceError>;

    /// Report whether any account already uses this employee id.
    async fn exists_by_employee_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<bool, AccountPersistenceError>;

    /// Resolve a login identifier against either unique column.
    ///
    /// Matches when `identifier` equals the company email or the employee id
    /// of an account; the uniqueness invariants guarantee at most one hit.
    async fn find_by_email_or_employee_id(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, AccountPersistenceError>;

    /// Persist a validated payload, assigning a fresh identity.
    ///
    /// Returns the stored record including the generated identity.
    async fn save(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError>;

    /// Look up an account by mobile number.
    ///
    /// Reserved for the password-reset flow; unused by registration and
    /// login.
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Account>, AccountPersistenceError>;
}
