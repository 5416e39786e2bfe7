//! Account workflow: registration and identifier-based authentication.
//!
//! The service owns the credential validation rules so inbound adapters only
//! translate payloads. Collaborators arrive through constructor injection;
//! there is no retained state between calls.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::account::{Account, NewAccount};
use crate::domain::auth::LoginCredentials;
use crate::domain::ports::{
    AccountPersistenceError, AccountRepository, AccountWorkflow, AuthenticationError,
    PasswordHasher, RegistrationError,
};
use crate::domain::registration::RegistrationCandidate;

/// Account workflow backed by a credential store gateway and a password
/// hashing primitive.
#[derive(Clone)]
pub struct AccountWorkflowService {
    repository: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountWorkflowService {
    /// Create a workflow over the given collaborators.
    pub fn new(repository: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

/// Fold store-level uniqueness rejections from `save` into the matching
/// registration failure; anything else passes through unclassified.
fn map_save_error(error: AccountPersistenceError) -> RegistrationError {
    match error {
        AccountPersistenceError::DuplicateCompanyEmail => RegistrationError::DuplicateEmail,
        AccountPersistenceError::DuplicateEmployeeId => RegistrationError::DuplicateEmployeeId,
        other => RegistrationError::Repository(other),
    }
}

#[async_trait]
impl AccountWorkflow for AccountWorkflowService {
    /// Check order is significant and observable: company email uniqueness,
    /// then employee id uniqueness, then password confirmation. The first
    /// failure wins when several conditions hold at once.
    async fn register(
        &self,
        candidate: RegistrationCandidate,
    ) -> Result<Account, RegistrationError> {
        if self
            .repository
            .exists_by_company_email(candidate.company_email())
            .await
            .map_err(RegistrationError::Repository)?
        {
            return Err(RegistrationError::DuplicateEmail);
        }

        if self
            .repository
            .exists_by_employee_id(candidate.employee_id())
            .await
            .map_err(RegistrationError::Repository)?
        {
            return Err(RegistrationError::DuplicateEmployeeId);
        }

        if candidate.password() != candidate.confirm_password() {
            return Err(RegistrationError::PasswordMismatch);
        }

        let password_hash = self.hasher.hash(candidate.password())?;
        let new_account = NewAccount {
            full_name: candidate.full_name().to_owned(),
            department: candidate.department().to_owned(),
            employee_id: candidate.employee_id().clone(),
            mobile_number: candidate.mobile_number().to_owned(),
            company_email: candidate.company_email().clone(),
            password_hash,
        };

        let account = self
            .repository
            .save(&new_account)
            .await
            .map_err(map_save_error)?;

        debug!(account_id = %account.id(), employee_id = %account.employee_id(), "account registered");
        Ok(account)
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Account, AuthenticationError> {
        let account = self
            .repository
            .find_by_email_or_employee_id(credentials.identifier())
            .await?
            .ok_or(AuthenticationError::NotFound)?;

        let matched = self
            .hasher
            .verify(credentials.password(), account.password_hash())?;
        if !matched {
            return Err(AuthenticationError::InvalidPassword);
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for check ordering, hashing, and fault mapping.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::account::{AccountId, CompanyEmail, EmployeeId};
    use crate::domain::ports::FixturePasswordHasher;
    use crate::domain::registration::RegistrationParts;
    use rstest::rstest;

    #[derive(Default)]
    struct StubState {
        accounts: Vec<Account>,
        exists_failure: Option<AccountPersistenceError>,
        find_failure: Option<AccountPersistenceError>,
        save_failure: Option<AccountPersistenceError>,
    }

    #[derive(Default)]
    struct StubAccountRepository {
        state: Mutex<StubState>,
        save_calls: AtomicUsize,
    }

    impl StubAccountRepository {
        fn with_account(account: Account) -> Self {
            Self {
                state: Mutex::new(StubState {
                    accounts: vec![account],
                    ..StubState::default()
                }),
                save_calls: AtomicUsize::new(0),
            }
        }

        fn set_exists_failure(&self, failure: AccountPersistenceError) {
            self.state.lock().expect("state lock").exists_failure = Some(failure);
        }

        fn set_find_failure(&self, failure: AccountPersistenceError) {
            self.state.lock().expect("state lock").find_failure = Some(failure);
        }

        fn set_save_failure(&self, failure: AccountPersistenceError) {
            self.state.lock().expect("state lock").save_failure = Some(failure);
        }

        fn save_call_count(&self) -> usize {
            self.save_calls.load(Ordering::Relaxed)
        }
    }

    #[async_trait]
    impl AccountRepository for StubAccountRepository {
        async fn exists_by_company_email(
            &self,
            email: &CompanyEmail,
        ) -> Result<bool, AccountPersistenceError> {
            let state = self.state.lock().expect("state lock");
            if let Some(failure) = state.exists_failure.clone() {
                return Err(failure);
            }
            Ok(state
                .accounts
                .iter()
                .any(|account| account.company_email() == email))
        }

        async fn exists_by_employee_id(
            &self,
            employee_id: &EmployeeId,
        ) -> Result<bool, AccountPersistenceError> {
            let state = self.state.lock().expect("state lock");
            if let Some(failure) = state.exists_failure.clone() {
                return Err(failure);
            }
            Ok(state
                .accounts
                .iter()
                .any(|account| account.employee_id() == employee_id))
        }

        async fn find_by_email_or_employee_id(
            &self,
            identifier: &str,
        ) -> Result<Option<Account>, AccountPersistenceError> {
            let state = self.state.lock().expect("state lock");
            if let Some(failure) = state.find_failure.clone() {
                return Err(failure);
            }
            Ok(state
                .accounts
                .iter()
                .find(|account| {
                    account.company_email().as_ref() == identifier
                        || account.employee_id().as_ref() == identifier
                })
                .cloned())
        }

        async fn save(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError> {
            self.save_calls.fetch_add(1, Ordering::Relaxed);
            let mut state = self.state.lock().expect("state lock");
            if let Some(failure) = state.save_failure.clone() {
                return Err(failure);
            }
            let stored = Account::from_new(AccountId::random(), account.clone());
            state.accounts.push(stored.clone());
            Ok(stored)
        }

        async fn find_by_mobile_number(
            &self,
            mobile_number: &str,
        ) -> Result<Option<Account>, AccountPersistenceError> {
            let state = self.state.lock().expect("state lock");
            Ok(state
                .accounts
                .iter()
                .find(|account| account.mobile_number() == mobile_number)
                .cloned())
        }
    }

    struct CandidateFields<'a> {
        email: &'a str,
        employee_id: &'a str,
        password: &'a str,
        confirm: &'a str,
    }

    fn candidate(fields: CandidateFields<'_>) -> RegistrationCandidate {
        RegistrationCandidate::try_from_parts(RegistrationParts {
            full_name: "Ann",
            department: "Eng",
            employee_id: fields.employee_id,
            password: fields.password,
            confirm_password: fields.confirm,
            mobile_number: "555",
            company_email: fields.email,
        })
        .expect("valid candidate shape")
    }

    fn credentials(identifier: &str, password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(identifier, password).expect("valid test credentials")
    }

    async fn registered_service() -> (AccountWorkflowService, Arc<StubAccountRepository>, Account) {
        let repository = Arc::new(StubAccountRepository::default());
        let service =
            AccountWorkflowService::new(repository.clone(), Arc::new(FixturePasswordHasher));
        let account = service
            .register(candidate(CandidateFields {
                email: "ann@co.com",
                employee_id: "E100",
                password: "pw1",
                confirm: "pw1",
            }))
            .await
            .expect("clean registration succeeds");
        (service, repository, account)
    }

    #[tokio::test]
    async fn duplicate_email_wins_regardless_of_other_fields() {
        let (service, repository, _) = registered_service().await;

        // Every other check would also fail; the email check must win.
        let err = service
            .register(candidate(CandidateFields {
                email: "ann@co.com",
                employee_id: "E100",
                password: "a",
                confirm: "b",
            }))
            .await
            .expect_err("duplicate email must fail");

        assert_eq!(err, RegistrationError::DuplicateEmail);
        assert_eq!(repository.save_call_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_employee_id_wins_over_password_mismatch() {
        let (service, _, _) = registered_service().await;

        let err = service
            .register(candidate(CandidateFields {
                email: "bob@co.com",
                employee_id: "E100",
                password: "a",
                confirm: "b",
            }))
            .await
            .expect_err("duplicate employee id must fail");

        assert_eq!(err, RegistrationError::DuplicateEmployeeId);
    }

    #[tokio::test]
    async fn password_mismatch_fails_without_touching_save() {
        let repository = Arc::new(StubAccountRepository::default());
        let service =
            AccountWorkflowService::new(repository.clone(), Arc::new(FixturePasswordHasher));

        let err = service
            .register(candidate(CandidateFields {
                email: "ann@co.com",
                employee_id: "E100",
                password: "pw1",
                confirm: "pw2",
            }))
            .await
            .expect_err("mismatched confirmation must fail");

        assert_eq!(err, RegistrationError::PasswordMismatch);
        assert_eq!(repository.save_call_count(), 0);
    }

    #[tokio::test]
    async fn clean_registration_stores_a_digest_and_copies_fields() {
        let (_, _, account) = registered_service().await;

        assert_ne!(account.password_hash(), "pw1");
        assert_eq!(account.full_name(), "Ann");
        assert_eq!(account.department(), "Eng");
        assert_eq!(account.employee_id().as_ref(), "E100");
        assert_eq!(account.mobile_number(), "555");
        assert_eq!(account.company_email().as_ref(), "ann@co.com");
    }

    #[rstest]
    #[case("ann@co.com")]
    #[case("E100")]
    #[tokio::test]
    async fn registered_account_authenticates_by_either_identifier(#[case] identifier: &str) {
        let (service, _, registered) = registered_service().await;

        let account = service
            .authenticate(&credentials(identifier, "pw1"))
            .await
            .expect("stored password verifies");

        assert_eq!(account.employee_id(), registered.employee_id());
        assert_eq!(account.id(), registered.id());
    }

    #[tokio::test]
    async fn unknown_identifier_is_not_found() {
        let (service, _, _) = registered_service().await;

        let err = service
            .authenticate(&credentials("nobody@co.com", "pw1"))
            .await
            .expect_err("unknown identifier must fail");

        assert_eq!(err, AuthenticationError::NotFound);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (service, _, _) = registered_service().await;

        let err = service
            .authenticate(&credentials("ann@co.com", "wrong"))
            .await
            .expect_err("wrong password must fail");

        assert_eq!(err, AuthenticationError::InvalidPassword);
    }

    #[rstest]
    #[case(
        AccountPersistenceError::DuplicateCompanyEmail,
        RegistrationError::DuplicateEmail
    )]
    #[case(
        AccountPersistenceError::DuplicateEmployeeId,
        RegistrationError::DuplicateEmployeeId
    )]
    #[tokio::test]
    async fn lost_save_race_reports_the_matching_duplicate(
        #[case] store_rejection: AccountPersistenceError,
        #[case] expected: RegistrationError,
    ) {
        // Both exists checks pass (empty store), then the constraint rejects
        // the write, as happens when a concurrent registration wins the race.
        let repository = Arc::new(StubAccountRepository::default());
        repository.set_save_failure(store_rejection);
        let service = AccountWorkflowService::new(repository, Arc::new(FixturePasswordHasher));

        let err = service
            .register(candidate(CandidateFields {
                email: "ann@co.com",
                employee_id: "E100",
                password: "pw1",
                confirm: "pw1",
            }))
            .await
            .expect_err("rejected write must fail");

        assert_eq!(err, expected);
    }

    #[tokio::test]
    async fn store_faults_propagate_unclassified() {
        let repository = Arc::new(StubAccountRepository::default());
        repository.set_exists_failure(AccountPersistenceError::connection("store down"));
        let service = AccountWorkflowService::new(repository, Arc::new(FixturePasswordHasher));

        let err = service
            .register(candidate(CandidateFields {
                email: "ann@co.com",
                employee_id: "E100",
                password: "pw1",
                confirm: "pw1",
            }))
            .await
            .expect_err("store fault must fail");

        assert_eq!(
            err,
            RegistrationError::Repository(AccountPersistenceError::connection("store down"))
        );
    }

    #[tokio::test]
    async fn lookup_faults_propagate_unclassified() {
        let repository = Arc::new(StubAccountRepository::default());
        repository.set_find_failure(AccountPersistenceError::query("bad plan"));
        let service = AccountWorkflowService::new(repository, Arc::new(FixturePasswordHasher));

        let err = service
            .authenticate(&credentials("ann@co.com", "pw1"))
            .await
            .expect_err("store fault must fail");

        assert_eq!(
            err,
            AuthenticationError::Repository(AccountPersistenceError::query("bad plan"))
        );
    }

    #[tokio::test]
    async fn worked_example_passes_end_to_end() {
        let (service, _, account) = registered_service().await;
        assert_eq!(account.employee_id().as_ref(), "E100");

        service
            .authenticate(&credentials("E100", "pw1"))
            .await
            .expect("employee id login succeeds");

        let err = service
            .authenticate(&credentials("ann@co.com", "wrong"))
            .await
            .expect_err("wrong password must fail");
        assert_eq!(err, AuthenticationError::InvalidPassword);

        let err = service
            .register(candidate(CandidateFields {
                email: "ann@co.com",
                employee_id: "E200",
                password: "pw9",
                confirm: "pw9",
            }))
            .await
            .expect_err("re-registering the email must fail");
        assert_eq!(err, RegistrationError::DuplicateEmail);
    }
}
