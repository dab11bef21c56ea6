use engine::repository::SearchableRepository;
use engine::repository::in_memory::InMemoryRepository;

pub mod model;
pub mod rules;
pub mod search;

pub use model::{Account, AccountId, AccountProps, CreateAccount};
pub use search::AccountSearch;

pub type AccountInMemoryRepository = InMemoryRepository<Account, AccountSearch>;

pub trait AccountEngine: Clone + Send + Sync + 'static {
    type Repo: AccountRepository;

    fn repo(&self) -> Self::Repo;
}

pub trait AccountRepository: SearchableRepository<Account> + Send + Sync + 'static {}

impl<T> AccountRepository for T where T: SearchableRepository<Account> + Send + Sync + 'static {}
