//! Domain primitives, the account workflow, and hexagonal ports.
//!
//! Purpose: keep credential validation and authentication rules independent
//! of HTTP and persistence. Types are immutable; invariants live in the
//! constructors and are documented on each type.

pub mod account;
pub mod account_workflow;
pub mod auth;
pub mod error;
pub mod ports;
pub mod registration;

pub use self::account::{Account, AccountId, AccountValidationError, CompanyEmail, EmployeeId, NewAccount};
pub use self::account_workflow::AccountWorkflowService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::registration::{RegistrationCandidate, RegistrationParts, RegistrationValidationError};
