use crate::error::CategoryServiceError;
use crate::routes::requests::{CategoryPatchRequest, CreateCategoryRequest};
use crate::routes::responses::{ApiError, CategoryResponse, CollectionResponse};
use crate::service::{CategoryPatch, CategoryService};
use crate::state::CatalogAppState;
use accounts_core::AccountEngine;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use categories_core::{CategoryEngine, CreateCategory};
use engine::error::EndpointError;
use engine::search::RawSearchInput;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

#[derive(OpenApi)]
#[openapi(paths(
    search_categories,
    get_category,
    create_category,
    patch_category,
    delete_category,
))]
pub(super) struct CategoryDocs;

const CATEGORY_SEARCH_PATH: &str = "/";
const CATEGORY_CREATE_PATH: &str = "/";
const CATEGORY_GET_PATH: &str = "/{category_id}";
const CATEGORY_PATCH_PATH: &str = "/{category_id}";
const CATEGORY_DELETE_PATH: &str = "/{category_id}";

type CategoryEndpointResult = Result<Response, EndpointError<CategoryServiceError>>;

pub(super) fn routes<C, A>() -> OpenApiRouter<CatalogAppState<C, A>>
where
    C: CategoryEngine,
    A: AccountEngine,
{
    OpenApiRouter::new()
        .route(CATEGORY_SEARCH_PATH, get(search_categories::<C>))
        .route(CATEGORY_CREATE_PATH, post(create_category::<C>))
        .route(CATEGORY_GET_PATH, get(get_category::<C>))
        .route(CATEGORY_PATCH_PATH, patch(patch_category::<C>))
        .route(CATEGORY_DELETE_PATH, delete(delete_category::<C>))
}

/// Search categories. Query values are normalized, never rejected: anything
/// malformed falls back to its default.
#[utoipa::path(
    get,
    path = CATEGORY_SEARCH_PATH,
    responses(
        (
            status = OK,
            description = "One page of matching categories",
            body = CollectionResponse<CategoryResponse>
        ),
    ),
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("per_page" = Option<u64>, Query, description = "Page size, defaults to 15"),
        (
            "sort" = Option<String>,
            Query,
            description = "Sort field: `name` or `created_at`. Defaults to newest first"
        ),
        ("sort_dir" = Option<String>, Query, description = "`asc` or `desc`"),
        ("filter" = Option<String>, Query, description = "Case-insensitive match against the name"),
    )
)]
#[instrument(skip_all, err(Debug))]
async fn search_categories<C: CategoryEngine>(
    State(service): State<CategoryService<C>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> CategoryEndpointResult {
    let result = service.search(RawSearchInput::from_pairs(pairs)).await?;
    Ok(CollectionResponse::from_search(result, CategoryResponse::ok).into_response())
}

/// Get the category with the given id.
#[utoipa::path(
    get,
    path = CATEGORY_GET_PATH,
    responses(
        (status = OK, description = "The category was found", body = CategoryResponse),
        (status = NOT_FOUND, description = "No category has the given id", body = ApiError),
        (status = UNPROCESSABLE_ENTITY, description = "The id is not a UUID", body = ApiError),
    ),
    params(
        ("category_id" = String, Path, description = "The category id"),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_category<C: CategoryEngine>(
    State(service): State<CategoryService<C>>,
    Path(category_id): Path<String>,
) -> CategoryEndpointResult {
    let category = service.find_by_id(&category_id).await?;
    Ok(CategoryResponse::ok(category).into_response())
}

/// Create a category.
#[utoipa::path(
    post,
    path = CATEGORY_CREATE_PATH,
    responses(
        (status = CREATED, description = "The category was created", body = CategoryResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "The category failed validation",
            body = ApiError
        ),
    ),
    request_body = CreateCategoryRequest
)]
#[instrument(skip_all, err(Debug), fields(req.name = %request.name))]
async fn create_category<C: CategoryEngine>(
    State(service): State<CategoryService<C>>,
    Json(request): Json<CreateCategoryRequest>,
) -> CategoryEndpointResult {
    let category = service
        .create(CreateCategory {
            name: request.name,
            description: request.description,
            is_active: request.is_active,
        })
        .await?;
    Ok(CategoryResponse::created(category).into_response())
}

/// Update some of the category's fields.
#[utoipa::path(
    patch,
    path = CATEGORY_PATCH_PATH,
    responses(
        (status = OK, description = "The category was updated", body = CategoryResponse),
        (status = NOT_FOUND, description = "No category has the given id", body = ApiError),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "The id is not a UUID or the update failed validation",
            body = ApiError
        ),
    ),
    params(
        ("category_id" = String, Path, description = "The category id"),
    ),
    request_body = CategoryPatchRequest,
)]
#[instrument(skip(service, request), err(Debug))]
async fn patch_category<C: CategoryEngine>(
    State(service): State<CategoryService<C>>,
    Path(category_id): Path<String>,
    Json(request): Json<CategoryPatchRequest>,
) -> CategoryEndpointResult {
    let category = service
        .update(
            &category_id,
            CategoryPatch {
                name: request.name,
                description: request.description,
                is_active: request.is_active,
            },
        )
        .await?;
    Ok(CategoryResponse::ok(category).into_response())
}

/// Delete the category with the given id.
#[utoipa::path(
    delete,
    path = CATEGORY_DELETE_PATH,
    responses(
        (status = NO_CONTENT, description = "The category was deleted"),
        (status = NOT_FOUND, description = "No category has the given id", body = ApiError),
        (status = UNPROCESSABLE_ENTITY, description = "The id is not a UUID", body = ApiError),
    ),
    params(
        ("category_id" = String, Path, description = "The category id"),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_category<C: CategoryEngine>(
    State(service): State<CategoryService<C>>,
    Path(category_id): Path<String>,
) -> CategoryEndpointResult {
    service.delete(&category_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
