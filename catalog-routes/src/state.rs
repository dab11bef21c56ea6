use crate::service::{AccountService, CategoryService};
use accounts_core::AccountEngine;
use axum::extract::FromRef;
use categories_core::CategoryEngine;

#[derive(Clone)]
pub struct CatalogAppState<C, A> {
    pub categories: CategoryService<C>,
    pub accounts: AccountService<A>,
}

impl<C: CategoryEngine, A: AccountEngine> CatalogAppState<C, A> {
    pub fn new(category_engine: C, account_engine: A) -> Self {
        Self {
            categories: CategoryService::new(category_engine),
            accounts: AccountService::new(account_engine),
        }
    }
}

impl<C: CategoryEngine, A: AccountEngine> FromRef<CatalogAppState<C, A>> for CategoryService<C> {
    fn from_ref(input: &CatalogAppState<C, A>) -> Self {
        input.categories.clone()
    }
}

impl<C: CategoryEngine, A: AccountEngine> FromRef<CatalogAppState<C, A>> for AccountService<A> {
    fn from_ref(input: &CatalogAppState<C, A>) -> Self {
        input.accounts.clone()
    }
}
