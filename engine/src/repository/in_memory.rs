use crate::entity::Entity;
use crate::repository::{BulkRepository, RepoError, RepoResult, Repository, SearchableRepository};
use crate::search::pipeline::{apply_filter, apply_paginate, apply_sort};
use crate::search::{SearchParams, SearchResult, SortDirection};
use error_stack::Report;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// How an in-memory store searches the entities it holds.
pub trait SearchPolicy<E> {
    const SORTABLE_FIELDS: &'static [&'static str];

    fn matches(item: &E, filter: &str) -> bool;

    /// Natural ordering of `field`. Only called with members of `SORTABLE_FIELDS`.
    fn compare(a: &E, b: &E, field: &str) -> Ordering;

    /// Ordering used when the caller asked for no sort at all.
    fn default_sort() -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// Entity store backed by a `Vec`. Entities keep insertion order.
pub struct InMemoryRepository<E, S = ()> {
    items: Arc<RwLock<Vec<E>>>,
    _search: PhantomData<fn() -> S>,
}

impl<E, S> InMemoryRepository<E, S> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            _search: PhantomData,
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<E, S> Default for InMemoryRepository<E, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> Clone for InMemoryRepository<E, S> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            _search: PhantomData,
        }
    }
}

impl<E, S> Debug for InMemoryRepository<E, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("entity", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

impl<E, S> Repository<E> for InMemoryRepository<E, S>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    #[instrument(skip_all, fields(entity = E::NAME, id = %entity.entity_id()))]
    async fn insert(&self, entity: E) -> RepoResult<()> {
        self.items.write().await.push(entity);
        Ok(())
    }

    #[instrument(skip_all, fields(entity = E::NAME, id = %entity.entity_id()))]
    async fn update(&self, entity: E) -> RepoResult<bool> {
        let mut items = self.items.write().await;
        let Some(slot) = items.iter_mut().find(|item| item.same_identity(&entity)) else {
            debug!("nothing to update");
            return Err(Report::new(RepoError::not_found::<E, _>([entity.entity_id()])));
        };
        *slot = entity;
        Ok(true)
    }

    #[instrument(skip_all, fields(entity = E::NAME, %id))]
    async fn delete(&self, id: E::Id) -> RepoResult<bool> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.entity_id() == &id) else {
            debug!("nothing to delete");
            return Err(Report::new(RepoError::not_found::<E, _>([id])));
        };
        items.remove(index);
        Ok(true)
    }

    #[instrument(skip_all, fields(entity = E::NAME, %id))]
    async fn find_by_id(&self, id: E::Id) -> RepoResult<E> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.entity_id() == &id)
            .cloned()
            .ok_or_else(|| Report::new(RepoError::not_found::<E, _>([id])))
    }
}

impl<E, S> BulkRepository<E> for InMemoryRepository<E, S>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    #[instrument(skip_all, fields(entity = E::NAME, count = entities.len()))]
    async fn bulk_insert(&self, entities: Vec<E>) -> RepoResult<()> {
        self.items.write().await.extend(entities);
        Ok(())
    }

    async fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.items.read().await.clone())
    }
}

impl<E, S> SearchableRepository<E> for InMemoryRepository<E, S>
where
    E: Entity + Clone + Send + Sync + 'static,
    S: SearchPolicy<E>,
{
    fn sortable_fields(&self) -> &'static [&'static str] {
        S::SORTABLE_FIELDS
    }

    #[instrument(skip_all, fields(
        entity = E::NAME,
        page = params.page(),
        per_page = params.per_page(),
        sort = params.sort(),
        filter = params.filter(),
    ))]
    async fn search(&self, params: SearchParams) -> RepoResult<SearchResult<E>> {
        let filtered = {
            let items = self.items.read().await;
            apply_filter(items.as_slice(), params.filter(), S::matches)
        };
        let total = filtered.len() as u64;

        let (sort, sort_dir) = match params.sort() {
            Some(sort) => (Some(sort), params.sort_dir()),
            None => S::default_sort()
                .map(|(field, dir)| (Some(field), Some(dir)))
                .unwrap_or((None, None)),
        };
        let sorted = apply_sort(filtered, sort, sort_dir, S::SORTABLE_FIELDS, S::compare);
        let page = apply_paginate(sorted, params.page(), params.per_page());

        debug!(total, returned = page.len(), "search complete");
        Ok(SearchResult::new(page, total, params.page(), params.per_page()))
    }
}
