//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! Implements the credential store gateway port. Uniqueness is ultimately
//! enforced by the database constraints; this adapter recognises their
//! rejections and reports them as the gateway's duplicate errors so the
//! workflow can fold a lost check-then-save race into an ordinary
//! registration failure.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::account::{Account, AccountId, CompanyEmail, EmployeeId, NewAccount};
use crate::domain::ports::{AccountPersistenceError, AccountRepository};

use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Constraint names from the `accounts` migration; part of the error-mapping
/// contract with the database.
const COMPANY_EMAIL_CONSTRAINT: &str = "accounts_company_email_key";
const EMPLOYEE_ID_CONSTRAINT: &str = "accounts_employee_id_key";

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to gateway errors.
fn map_pool_error(error: PoolError) -> AccountPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            AccountPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to gateway errors.
///
/// Unique violations are matched by constraint name when the driver reports
/// one, falling back to message inspection; everything else degrades to the
/// generic connection/query variants.
fn map_diesel_error(error: diesel::result::Error) -> AccountPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let constraint = info.constraint_name().unwrap_or_else(|| info.message());
            if constraint.contains(COMPANY_EMAIL_CONSTRAINT) {
                AccountPersistenceError::DuplicateCompanyEmail
            } else if constraint.contains(EMPLOYEE_ID_CONSTRAINT) {
                AccountPersistenceError::DuplicateEmployeeId
            } else {
                AccountPersistenceError::query("unrecognised unique constraint violation")
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AccountPersistenceError::connection("database connection error")
        }
        _ => AccountPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain account.
///
/// Stored rows were validated on insert; a row failing re-validation means
/// the table was modified out of band and is reported as a query fault.
fn row_to_account(row: AccountRow) -> Result<Account, AccountPersistenceError> {
    let employee_id = EmployeeId::new(row.employee_id)
        .map_err(|err| AccountPersistenceError::query(format!("stored record invalid: {err}")))?;
    let company_email = CompanyEmail::new(row.company_email)
        .map_err(|err| AccountPersistenceError::query(format!("stored record invalid: {err}")))?;
    let details = NewAccount::new(
        row.full_name,
        row.department,
        employee_id,
        row.mobile_number,
        company_email,
        row.password_hash,
    )
    .map_err(|err| AccountPersistenceError::query(format!("stored record invalid: {err}")))?;

    Ok(Account::from_new(AccountId::from_uuid(row.id), details))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn exists_by_company_email(
        &self,
        email: &CompanyEmail,
    ) -> Result<bool, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            accounts::table.filter(accounts::company_email.eq(email.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn exists_by_employee_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<bool, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            accounts::table.filter(accounts::employee_id.eq(employee_id.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn find_by_email_or_employee_id(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Explicit union check against both unique columns; never parse the
        // identifier to guess which field it targets.
        let row: Option<AccountRow> = accounts::table
            .filter(
                accounts::company_email
                    .eq(identifier)
                    .or(accounts::employee_id.eq(identifier)),
            )
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn save(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAccountRow {
            id: Uuid::new_v4(),
            full_name: &account.full_name,
            department: &account.department,
            employee_id: account.employee_id.as_ref(),
            mobile_number: &account.mobile_number,
            company_email: account.company_email.as_ref(),
            password_hash: &account.password_hash,
        };

        let stored: AccountRow = diesel::insert_into(accounts::table)
            .values(&new_row)
            .returning(AccountRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_account(stored)
    }

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountRow> = accounts::table
            .filter(accounts::mobile_number.eq(mobile_number))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the pure mapping functions; query execution is exercised
    //! against a live database in deployment environments.

    use super::*;
    use chrono::Utc;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn unique_violation(message: &str) -> DieselError {
        // `String` implements `DatabaseErrorInformation` with no constraint
        // name, so the mapper's message fallback is what gets exercised.
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(message.to_owned()))
    }

    #[rstest]
    #[case(
        "duplicate key value violates unique constraint \"accounts_company_email_key\"",
        AccountPersistenceError::DuplicateCompanyEmail
    )]
    #[case(
        "duplicate key value violates unique constraint \"accounts_employee_id_key\"",
        AccountPersistenceError::DuplicateEmployeeId
    )]
    fn unique_violations_map_to_duplicates(
        #[case] message: &str,
        #[case] expected: AccountPersistenceError,
    ) {
        assert_eq!(map_diesel_error(unique_violation(message)), expected);
    }

    #[test]
    fn unrecognised_unique_violations_degrade_to_query_errors() {
        let mapped = map_diesel_error(unique_violation("some other constraint"));
        assert!(matches!(mapped, AccountPersistenceError::Query { .. }));
    }

    #[test]
    fn closed_connections_map_to_connection_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection unexpectedly".to_owned()),
        );
        assert!(matches!(
            map_diesel_error(error),
            AccountPersistenceError::Connection { .. }
        ));
    }

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, AccountPersistenceError::connection("timed out"));
    }

    #[test]
    fn rows_convert_to_domain_accounts() {
        let row = AccountRow {
            id: Uuid::new_v4(),
            full_name: "Ann".to_owned(),
            department: "Eng".to_owned(),
            employee_id: "E100".to_owned(),
            mobile_number: "555".to_owned(),
            company_email: "ann@co.com".to_owned(),
            password_hash: "digest".to_owned(),
            created_at: Utc::now(),
        };

        let account = row_to_account(row).expect("valid row converts");
        assert_eq!(account.employee_id().as_ref(), "E100");
        assert_eq!(account.company_email().as_ref(), "ann@co.com");
        assert_eq!(account.password_hash(), "digest");
    }

    #[test]
    fn tampered_rows_surface_as_query_faults() {
        let row = AccountRow {
            id: Uuid::new_v4(),
            full_name: "Ann".to_owned(),
            department: "Eng".to_owned(),
            employee_id: String::new(),
            mobile_number: "555".to_owned(),
            company_email: "ann@co.com".to_owned(),
            password_hash: "digest".to_owned(),
            created_at: Utc::now(),
        };

        let err = row_to_account(row).expect_err("invalid row must fail");
        assert!(matches!(err, AccountPersistenceError::Query { .. }));
    }
}
