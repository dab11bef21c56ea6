use crate::routes;
use crate::state::CatalogAppState;
use accounts_core::{AccountEngine, AccountInMemoryRepository};
use axum_test::TestServer;
use categories_core::{CategoryEngine, CategoryInMemoryRepository};


const PREFIX: &str = "/api";

#[derive(Debug, Clone, Default)]
struct TestEngine {
    categories: CategoryInMemoryRepository,
    accounts: AccountInMemoryRepository,
}

impl CategoryEngine for TestEngine {
    type Repo = CategoryInMemoryRepository;

    fn repo(&self) -> Self::Repo {
        self.categories.clone()
    }
}

impl AccountEngine for TestEngine {
    type Repo = AccountInMemoryRepository;

    fn repo(&self) -> Self::Repo {
        self.accounts.clone()
    }
}

fn server_with(engine: TestEngine) -> TestServer {
    let router = routes::build(CatalogAppState::new(engine.clone(), engine), PREFIX);
    TestServer::new(router).unwrap()
}

fn server() -> TestServer {
    server_with(TestEngine::default())
}
