use crate::entity::Entity;
use crate::search::{SearchParams, SearchResult};
use error_stack::Report;
use std::fmt::Display;

pub mod in_memory;

pub type RepoResult<T> = Result<T, Report<RepoError>>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RepoError {
    #[error("{} not found using ID {}", .entity, .ids.join(", "))]
    NotFound {
        entity: &'static str,
        ids: Vec<String>,
    },
}

impl RepoError {
    pub fn not_found<E, I>(ids: I) -> Self
    where
        E: Entity,
        I: IntoIterator,
        I::Item: Display,
    {
        RepoError::NotFound {
            entity: E::NAME,
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Storage contract every entity store fulfils.
pub trait Repository<E: Entity> {
    fn insert(&self, entity: E) -> impl Future<Output = RepoResult<()>> + Send;

    /// Replaces the stored entity with the same id. Fails with
    /// [`RepoError::NotFound`] when there is none.
    fn update(&self, entity: E) -> impl Future<Output = RepoResult<bool>> + Send;

    fn delete(&self, id: E::Id) -> impl Future<Output = RepoResult<bool>> + Send;

    fn find_by_id(&self, id: E::Id) -> impl Future<Output = RepoResult<E>> + Send;
}

/// Optional capabilities for stores that can take and hand back whole collections.
pub trait BulkRepository<E: Entity>: Repository<E> {
    fn bulk_insert(&self, entities: Vec<E>) -> impl Future<Output = RepoResult<()>> + Send;

    fn find_all(&self) -> impl Future<Output = RepoResult<Vec<E>>> + Send;
}

pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Field names accepted as a sort key. Any other requested sort is ignored.
    fn sortable_fields(&self) -> &'static [&'static str];

    fn search(
        &self,
        params: SearchParams,
    ) -> impl Future<Output = RepoResult<SearchResult<E>>> + Send;
}
