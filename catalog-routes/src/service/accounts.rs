use crate::ServiceResult;
use crate::error::{AccountServiceError, ServiceErrorKind};
use accounts_core::{Account, AccountEngine, AccountId, CreateAccount};
use engine::repository::{Repository, SearchableRepository};
use engine::search::{RawSearchInput, SearchParams, SearchResult};
use engine::validation::EntityValidationError;
use engine::{Entity, Identifier};
use error_stack::{Report, ResultExt};
use tracing::instrument;

type AccountResult<T> = ServiceResult<T, AccountServiceError>;

#[derive(Debug, Clone)]
pub struct AccountService<T> {
    engine: T,
}

impl<T: AccountEngine> AccountService<T> {
    pub fn new(engine: T) -> Self {
        AccountService { engine }
    }

    #[instrument(skip(self), name = "service#accounts#find_by_id")]
    pub async fn find_by_id(&self, id: &str) -> AccountResult<Account> {
        let id = parse_id(id)?;
        self.engine
            .repo()
            .find_by_id(id)
            .await
            .map_err(AccountServiceError::from_repo)
    }

    #[instrument(skip_all, name = "service#accounts#search")]
    pub async fn search(&self, raw: RawSearchInput) -> AccountResult<SearchResult<Account>> {
        self.engine
            .repo()
            .search(SearchParams::normalize(&raw))
            .await
            .map_err(AccountServiceError::from_repo)
    }

    #[instrument(skip_all, name = "service#accounts#create")]
    pub async fn create(&self, command: CreateAccount) -> AccountResult<Account> {
        let account = Account::create(command);
        ensure_valid(&account)?;

        self.engine
            .repo()
            .insert(account.clone())
            .await
            .map_err(AccountServiceError::from_repo)?;
        Ok(account)
    }

    #[instrument(skip(self, email), name = "service#accounts#change_email")]
    pub async fn change_email(&self, id: &str, email: String) -> AccountResult<Account> {
        let id = parse_id(id)?;
        let repo = self.engine.repo();
        let mut account = repo
            .find_by_id(id)
            .await
            .map_err(AccountServiceError::from_repo)?;

        account.change_email(email);
        ensure_valid(&account)?;

        repo.update(account.clone())
            .await
            .map_err(AccountServiceError::from_repo)?;
        Ok(account)
    }
}

fn parse_id(id: &str) -> AccountResult<AccountId> {
    Identifier::parse(id).change_context(AccountServiceError::InvalidId)
}

fn ensure_valid(account: &Account) -> AccountResult<()> {
    if account.notification().has_errors() {
        return Err(
            Report::new(EntityValidationError::new(account.notification().clone()))
                .change_context(AccountServiceError::Validation),
        );
    }
    Ok(())
}
