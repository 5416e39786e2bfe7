//! Account aggregate and its validated value types.
//!
//! Purpose: give the workflow strongly typed inputs so shape invariants
//! (trimmed, non-empty identifiers; plausible email) are enforced once, at
//! construction, instead of at every call site.

use std::fmt;

use uuid::Uuid;

/// Validation errors raised by account value-type constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    #[error("full name must not be empty")]
    EmptyFullName,
    #[error("company email must not be empty")]
    EmptyCompanyEmail,
    #[error("company email must contain an '@' sign")]
    InvalidCompanyEmail,
    #[error("employee id must not be empty")]
    EmptyEmployeeId,
}

/// Opaque account identity assigned by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Wrap an identity produced by the store.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identity.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company email address, unique across all accounts.
///
/// ## Invariants
/// - trimmed of surrounding whitespace;
/// - non-empty and contains an `@` sign.
///
/// Anything stricter is left to the mail infrastructure; the store only needs
/// a stable, comparable key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyEmail(String);

impl CompanyEmail {
    /// Validate and construct a [`CompanyEmail`].
    pub fn new(email: impl Into<String>) -> Result<Self, AccountValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyCompanyEmail);
        }
        if !trimmed.contains('@') {
            return Err(AccountValidationError::InvalidCompanyEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CompanyEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CompanyEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Employee identifier, unique across all accounts.
///
/// ## Invariants
/// - trimmed of surrounding whitespace and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and construct an [`EmployeeId`].
    pub fn new(id: impl Into<String>) -> Result<Self, AccountValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyEmployeeId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Validated account payload awaiting persistence.
///
/// Produced by the registration workflow once every check has passed; the
/// credential store assigns the identity on save. `password_hash` always
/// holds a digest, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub full_name: String,
    pub department: String,
    pub employee_id: EmployeeId,
    pub mobile_number: String,
    pub company_email: CompanyEmail,
    pub password_hash: String,
}

impl NewAccount {
    /// Build a payload from validated components.
    ///
    /// The full name is trimmed and must not be blank; department and mobile
    /// number are stored as given, matching the original record layout.
    pub fn new(
        full_name: impl Into<String>,
        department: impl Into<String>,
        employee_id: EmployeeId,
        mobile_number: impl Into<String>,
        company_email: CompanyEmail,
        password_hash: impl Into<String>,
    ) -> Result<Self, AccountValidationError> {
        let full_name = full_name.into();
        let trimmed = full_name.trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyFullName);
        }
        Ok(Self {
            full_name: trimmed.to_owned(),
            department: department.into(),
            employee_id,
            mobile_number: mobile_number.into(),
            company_email,
            password_hash: password_hash.into(),
        })
    }
}

/// Persisted employee account.
///
/// ## Invariants
/// - `employee_id` and `company_email` are unique across all accounts,
///   enforced by the credential store;
/// - `password_hash` holds a one-way digest from the moment the account is
///   created.
///
/// Intentionally not serialisable: the stored digest must never leave the
/// process by accident. The HTTP adapter maps accounts to response DTOs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    full_name: String,
    department: String,
    employee_id: EmployeeId,
    mobile_number: String,
    company_email: CompanyEmail,
    password_hash: String,
}

impl Account {
    /// Attach a store-assigned identity to a validated payload.
    pub fn from_new(id: AccountId, details: NewAccount) -> Self {
        Self {
            id,
            full_name: details.full_name,
            department: details.department,
            employee_id: details.employee_id,
            mobile_number: details.mobile_number,
            company_email: details.company_email,
            password_hash: details.password_hash,
        }
    }

    /// Store-assigned identity.
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Employee's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Unique employee identifier.
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Contact mobile number (reserved for password reset).
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    /// Unique company email address.
    pub fn company_email(&self) -> &CompanyEmail {
        &self.company_email
    }

    /// Stored password digest, never the plaintext.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}
