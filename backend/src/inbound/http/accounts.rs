//! Account API handlers.
//!
//! ```text
//! POST /api/v1/accounts  register a new employee account
//! POST /api/v1/login     authenticate by company email or employee id
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::registration::RegistrationParts;
use crate::domain::{
    Account, AccountValidationError, Error, LoginCredentials, LoginValidationError,
    RegistrationCandidate, RegistrationValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/v1/accounts`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub department: String,
    pub employee_id: String,
    pub password: String,
    pub confirm_password: String,
    pub mobile_number: String,
    pub company_email: String,
}

/// Login request body for `POST /api/v1/login`.
///
/// The identifier may be either the company email or the employee id.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.identifier, &value.password)
    }
}

/// Account payload returned to clients.
///
/// Deliberately omits the stored password digest: the domain returns the full
/// record, the boundary strips it.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    pub full_name: String,
    pub department: String,
    pub employee_id: String,
    pub mobile_number: String,
    pub company_email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: *account.id().as_uuid(),
            full_name: account.full_name().to_owned(),
            department: account.department().to_owned(),
            employee_id: account.employee_id().as_ref().to_owned(),
            mobile_number: account.mobile_number().to_owned(),
            company_email: account.company_email().as_ref().to_owned(),
        }
    }
}

fn map_account_validation_error(err: &AccountValidationError) -> Error {
    let (field, code) = match err {
        AccountValidationError::EmptyFullName => ("fullName", "empty_full_name"),
        AccountValidationError::EmptyCompanyEmail => ("companyEmail", "empty_company_email"),
        AccountValidationError::InvalidCompanyEmail => ("companyEmail", "invalid_company_email"),
        AccountValidationError::EmptyEmployeeId => ("employeeId", "empty_employee_id"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_registration_validation_error(err: RegistrationValidationError) -> Error {
    match err {
        RegistrationValidationError::Account(inner) => map_account_validation_error(&inner),
        RegistrationValidationError::EmptyPassword => {
            Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyIdentifier => {
            Error::invalid_request("identifier must not be empty")
                .with_details(json!({ "field": "identifier", "code": "empty_identifier" }))
        }
        LoginValidationError::EmptyPassword => {
            Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
    }
}

/// Register a new employee account.
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Invalid request or password mismatch", body = Error),
        (status = 409, description = "Company email or employee id already registered", body = Error),
        (status = 503, description = "Credential store unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "registerAccount"
)]
#[post("/accounts")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let candidate = RegistrationCandidate::try_from_parts(RegistrationParts {
        full_name: &request.full_name,
        department: &request.department,
        employee_id: &request.employee_id,
        password: &request.password,
        confirm_password: &request.confirm_password,
        mobile_number: &request.mobile_number,
        company_email: &request.company_email,
    })
    .map_err(map_registration_validation_error)?;

    let account = state.accounts.register(candidate).await.map_err(Error::from)?;
    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// Authenticate an employee by company email or employee id.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AccountResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid password", body = Error),
        (status = 404, description = "No account matches the identifier", body = Error),
        (status = 503, description = "Credential store unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AccountResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let account = state
        .accounts
        .authenticate(&credentials)
        .await
        .map_err(Error::from)?;
    Ok(web::Json(AccountResponse::from(account)))
}
