//! Registration input for the account workflow.

use zeroize::Zeroizing;

use crate::domain::account::{AccountValidationError, CompanyEmail, EmployeeId};

/// Transient, validated registration input.
///
/// Exists only for the duration of one registration call and is never
/// persisted. Both plaintext password fields live in zeroizing buffers; the
/// confirmation equality check belongs to the workflow so it runs at the
/// documented position in the check order, not at construction.
#[derive(Debug, Clone)]
pub struct RegistrationCandidate {
    full_name: String,
    department: String,
    employee_id: EmployeeId,
    password: Zeroizing<String>,
    confirm_password: Zeroizing<String>,
    mobile_number: String,
    company_email: CompanyEmail,
}

/// Field bundle for [`RegistrationCandidate::try_from_parts`].
///
/// Mirrors the inbound registration payload one to one.
#[derive(Debug, Clone)]
pub struct RegistrationParts<'a> {
    pub full_name: &'a str,
    pub department: &'a str,
    pub employee_id: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub mobile_number: &'a str,
    pub company_email: &'a str,
}

/// Validation errors raised when building a [`RegistrationCandidate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error(transparent)]
    Account(#[from] AccountValidationError),
    #[error("password must not be empty")]
    EmptyPassword,
}

impl RegistrationCandidate {
    /// Validate raw inbound fields into a candidate.
    ///
    /// Shape checks only: uniqueness and password confirmation are workflow
    /// concerns with a defined ordering.
    pub fn try_from_parts(parts: RegistrationParts<'_>) -> Result<Self, RegistrationValidationError> {
        let full_name = parts.full_name.trim();
        if full_name.is_empty() {
            return Err(AccountValidationError::EmptyFullName.into());
        }
        let employee_id = EmployeeId::new(parts.employee_id)?;
        let company_email = CompanyEmail::new(parts.company_email)?;
        if parts.password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }

        Ok(Self {
            full_name: full_name.to_owned(),
            department: parts.department.to_owned(),
            employee_id,
            password: Zeroizing::new(parts.password.to_owned()),
            confirm_password: Zeroizing::new(parts.confirm_password.to_owned()),
            mobile_number: parts.mobile_number.to_owned(),
            company_email,
        })
    }

    /// Employee's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Requested unique employee identifier.
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Plaintext confirmation compared by the workflow.
    pub fn confirm_password(&self) -> &str {
        self.confirm_password.as_str()
    }

    /// Contact mobile number.
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    /// Requested unique company email.
    pub fn company_email(&self) -> &CompanyEmail {
        &self.company_email
    }
}
