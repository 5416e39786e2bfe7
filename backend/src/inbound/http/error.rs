//! HTTP adapter mapping for domain and workflow errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing actix
//! handlers to turn typed workflow failures into consistent JSON responses
//! and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::ports::{AccountPersistenceError, AuthenticationError, RegistrationError};
use crate::domain::{Error, ErrorCode};
use crate::middleware::RequestId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients; the request id lets
        // operators correlate the redacted response with the logged cause.
        error!(
            error = %err,
            request_id = ?RequestId::current(),
            "actix error promoted to domain error"
        );
        Error::internal("Internal server error")
    }
}

fn map_persistence_error(error: AccountPersistenceError) -> Error {
    match error {
        AccountPersistenceError::Connection { message } => Error::service_unavailable(message),
        AccountPersistenceError::Query { message } => Error::internal(message),
        // Unreachable through the workflow, which folds duplicates into its
        // own taxonomy; mapped defensively all the same.
        duplicate @ (AccountPersistenceError::DuplicateCompanyEmail
        | AccountPersistenceError::DuplicateEmployeeId) => {
            Error::conflict(duplicate.to_string())
        }
    }
}

impl From<RegistrationError> for Error {
    fn from(err: RegistrationError) -> Self {
        let message = err.to_string();
        match err {
            RegistrationError::DuplicateEmail => {
                Error::conflict(message).with_details(json!({ "field": "companyEmail" }))
            }
            RegistrationError::DuplicateEmployeeId => {
                Error::conflict(message).with_details(json!({ "field": "employeeId" }))
            }
            RegistrationError::PasswordMismatch => Error::invalid_request(message),
            RegistrationError::Repository(inner) => map_persistence_error(inner),
            RegistrationError::Hashing(inner) => Error::internal(inner.to_string()),
        }
    }
}

impl From<AuthenticationError> for Error {
    fn from(err: AuthenticationError) -> Self {
        let message = err.to_string();
        match err {
            AuthenticationError::NotFound => Error::not_found(message),
            AuthenticationError::InvalidPassword => Error::unauthorized(message),
            AuthenticationError::Repository(inner) => map_persistence_error(inner),
            AuthenticationError::Hashing(inner) => Error::internal(inner.to_string()),
        }
    }
}
