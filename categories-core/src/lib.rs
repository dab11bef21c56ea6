use engine::repository::SearchableRepository;
use engine::repository::in_memory::InMemoryRepository;

pub mod model;
pub mod rules;
pub mod search;

pub use model::{Category, CategoryId, CategoryProps, CreateCategory};
pub use search::CategorySearch;

pub type CategoryInMemoryRepository = InMemoryRepository<Category, CategorySearch>;

pub trait CategoryEngine: Clone + Send + Sync + 'static {
    type Repo: CategoryRepository;

    fn repo(&self) -> Self::Repo;
}

pub trait CategoryRepository: SearchableRepository<Category> + Send + Sync + 'static {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category> + Send + Sync + 'static {}
