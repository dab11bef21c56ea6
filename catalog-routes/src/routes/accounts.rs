use crate::error::AccountServiceError;
use crate::routes::requests::{ChangeEmailRequest, CreateAccountRequest};
use crate::routes::responses::{AccountResponse, ApiError, CollectionResponse};
use crate::service::AccountService;
use crate::state::CatalogAppState;
use accounts_core::{AccountEngine, CreateAccount};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use categories_core::CategoryEngine;
use engine::error::EndpointError;
use engine::search::RawSearchInput;
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

#[derive(OpenApi)]
#[openapi(paths(search_accounts, get_account, create_account, change_account_email))]
pub(super) struct AccountDocs;

const ACCOUNT_SEARCH_PATH: &str = "/";
const ACCOUNT_CREATE_PATH: &str = "/";
const ACCOUNT_GET_PATH: &str = "/{account_id}";
const ACCOUNT_EMAIL_PATH: &str = "/{account_id}/email";

type AccountEndpointResult = Result<Response, EndpointError<AccountServiceError>>;

pub(super) fn routes<C, A>() -> OpenApiRouter<CatalogAppState<C, A>>
where
    C: CategoryEngine,
    A: AccountEngine,
{
    OpenApiRouter::new()
        .route(ACCOUNT_SEARCH_PATH, get(search_accounts::<A>))
        .route(ACCOUNT_CREATE_PATH, post(create_account::<A>))
        .route(ACCOUNT_GET_PATH, get(get_account::<A>))
        .route(ACCOUNT_EMAIL_PATH, patch(change_account_email::<A>))
}

#[utoipa::path(
    get,
    path = ACCOUNT_SEARCH_PATH,
    responses(
        (
            status = OK,
            description = "One page of matching accounts",
            body = CollectionResponse<AccountResponse>
        ),
    ),
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("per_page" = Option<u64>, Query, description = "Page size, defaults to 15"),
        ("sort" = Option<String>, Query, description = "Sort field: `email` or `created_at`"),
        ("sort_dir" = Option<String>, Query, description = "`asc` or `desc`"),
        (
            "filter" = Option<String>,
            Query,
            description = "Case-insensitive match against the email"
        ),
    )
)]
#[instrument(skip_all, err(Debug))]
async fn search_accounts<A: AccountEngine>(
    State(service): State<AccountService<A>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AccountEndpointResult {
    let result = service.search(RawSearchInput::from_pairs(pairs)).await?;
    Ok(CollectionResponse::from_search(result, AccountResponse::ok).into_response())
}

#[utoipa::path(
    get,
    path = ACCOUNT_GET_PATH,
    responses(
        (status = OK, description = "The account was found", body = AccountResponse),
        (status = NOT_FOUND, description = "No account has the given id", body = ApiError),
        (status = UNPROCESSABLE_ENTITY, description = "The id is not a UUID", body = ApiError),
    ),
    params(
        ("account_id" = String, Path, description = "The account id"),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_account<A: AccountEngine>(
    State(service): State<AccountService<A>>,
    Path(account_id): Path<String>,
) -> AccountEndpointResult {
    let account = service.find_by_id(&account_id).await?;
    Ok(AccountResponse::ok(account).into_response())
}

/// Open an account. Both the account id and the profile id are generated.
#[utoipa::path(
    post,
    path = ACCOUNT_CREATE_PATH,
    responses(
        (status = CREATED, description = "The account was created", body = AccountResponse),
        (status = UNPROCESSABLE_ENTITY, description = "The email is not valid", body = ApiError),
    ),
    request_body = CreateAccountRequest
)]
#[instrument(skip_all, err(Debug))]
async fn create_account<A: AccountEngine>(
    State(service): State<AccountService<A>>,
    Json(request): Json<CreateAccountRequest>,
) -> AccountEndpointResult {
    let account = service.create(CreateAccount::new(request.email)).await?;
    Ok(AccountResponse::created(account).into_response())
}

#[utoipa::path(
    patch,
    path = ACCOUNT_EMAIL_PATH,
    responses(
        (status = OK, description = "The email was changed", body = AccountResponse),
        (status = NOT_FOUND, description = "No account has the given id", body = ApiError),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "The id is not a UUID or the email is not valid",
            body = ApiError
        ),
    ),
    params(
        ("account_id" = String, Path, description = "The account id"),
    ),
    request_body = ChangeEmailRequest,
)]
#[instrument(skip(service, request), err(Debug))]
async fn change_account_email<A: AccountEngine>(
    State(service): State<AccountService<A>>,
    Path(account_id): Path<String>,
    Json(request): Json<ChangeEmailRequest>,
) -> AccountEndpointResult {
    let account = service.change_email(&account_id, request.email).await?;
    Ok(AccountResponse::ok(account).into_response())
}
