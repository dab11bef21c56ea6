use crate::state::CatalogAppState;
use accounts_core::AccountEngine;
use axum::routing::get;
use axum::{Json, Router};
use categories_core::CategoryEngine;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

mod accounts;
mod categories;
pub mod requests;
pub mod responses;

const CATEGORY_ROOT_PATH: &str = "/categories";
const ACCOUNT_ROOT_PATH: &str = "/accounts";
const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "catalog", description = "Categories and accounts"),
    nest(
        (path = CATEGORY_ROOT_PATH, api = categories::CategoryDocs),
        (path = ACCOUNT_ROOT_PATH, api = accounts::AccountDocs),
    )
)]
struct ApiDoc;

/// Builds every catalog route under `prefix`, plus the generated OpenAPI
/// document at `{prefix}/api-docs/openapi.json`.
pub fn build<C, A>(app_state: CatalogAppState<C, A>, prefix: &str) -> Router
where
    C: CategoryEngine,
    A: AccountEngine,
{
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes(app_state))
        .split_for_parts();

    let router = router.route(
        OPENAPI_PATH,
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    );

    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        info!("serving catalog routes at the root");
        router
    } else {
        info!("serving catalog routes under {prefix}");
        Router::new().nest(prefix, router)
    }
}

fn routes<S, C, A>(app_state: CatalogAppState<C, A>) -> OpenApiRouter<S>
where
    C: CategoryEngine,
    A: AccountEngine,
{
    OpenApiRouter::new()
        .nest(CATEGORY_ROOT_PATH, categories::routes::<C, A>())
        .nest(ACCOUNT_ROOT_PATH, accounts::routes::<C, A>())
        .with_state(app_state)
}
