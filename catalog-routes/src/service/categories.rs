use crate::ServiceResult;
use crate::error::{CategoryServiceError, ServiceErrorKind};
use categories_core::{Category, CategoryEngine, CategoryId, CreateCategory};
use engine::repository::{Repository, SearchableRepository};
use engine::search::{RawSearchInput, SearchParams, SearchResult};
use engine::validation::EntityValidationError;
use engine::{Entity, Identifier};
use error_stack::{Report, ResultExt};
use optional_field::Field;
use tracing::{debug, instrument};

type CategoryResult<T> = ServiceResult<T, CategoryServiceError>;

/// Partial update of a category. `description` distinguishes "leave alone"
/// from "clear" through [`Field`].
#[derive(Debug, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Field<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CategoryService<T> {
    engine: T,
}

impl<T: CategoryEngine> CategoryService<T> {
    pub fn new(engine: T) -> Self {
        CategoryService { engine }
    }

    #[instrument(skip(self), name = "service#categories#find_by_id")]
    pub async fn find_by_id(&self, id: &str) -> CategoryResult<Category> {
        let id = parse_id(id)?;
        self.engine
            .repo()
            .find_by_id(id)
            .await
            .map_err(CategoryServiceError::from_repo)
    }

    #[instrument(skip_all, name = "service#categories#search")]
    pub async fn search(&self, raw: RawSearchInput) -> CategoryResult<SearchResult<Category>> {
        let params = SearchParams::normalize(&raw);
        debug!(?params, "normalized search input");
        self.engine
            .repo()
            .search(params)
            .await
            .map_err(CategoryServiceError::from_repo)
    }

    #[instrument(skip_all, name = "service#categories#create", fields(name = %command.name))]
    pub async fn create(&self, command: CreateCategory) -> CategoryResult<Category> {
        let category = Category::create(command);
        ensure_valid(&category)?;

        self.engine
            .repo()
            .insert(category.clone())
            .await
            .map_err(CategoryServiceError::from_repo)?;
        Ok(category)
    }

    #[instrument(skip(self, patch), name = "service#categories#update")]
    pub async fn update(&self, id: &str, patch: CategoryPatch) -> CategoryResult<Category> {
        let id = parse_id(id)?;
        let repo = self.engine.repo();
        let mut category = repo
            .find_by_id(id)
            .await
            .map_err(CategoryServiceError::from_repo)?;

        if let Some(name) = patch.name {
            category.change_name(name);
        }
        if let Field::Present(description) = patch.description {
            category.change_description(description);
        }
        match patch.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        ensure_valid(&category)?;

        repo.update(category.clone())
            .await
            .map_err(CategoryServiceError::from_repo)?;
        Ok(category)
    }

    #[instrument(skip(self), name = "service#categories#delete")]
    pub async fn delete(&self, id: &str) -> CategoryResult<()> {
        let id = parse_id(id)?;
        self.engine
            .repo()
            .delete(id)
            .await
            .map_err(CategoryServiceError::from_repo)?;
        Ok(())
    }
}

fn parse_id(id: &str) -> CategoryResult<CategoryId> {
    Identifier::parse(id).change_context(CategoryServiceError::InvalidId)
}

fn ensure_valid(category: &Category) -> CategoryResult<()> {
    if category.notification().has_errors() {
        return Err(
            Report::new(EntityValidationError::new(category.notification().clone()))
                .change_context(CategoryServiceError::Validation),
        );
    }
    Ok(())
}
