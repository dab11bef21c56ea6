use accounts_core::{AccountInMemoryRepository, AccountRepository};
use axum::Router;
use catalog_routes::state::CatalogAppState;
use categories_core::{CategoryInMemoryRepository, CategoryRepository};
use config::Settings;
use dotenv::dotenv;
use engine::app::{self, AppResult};
use error_stack::fmt::ColorMode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod config;

#[tokio::main]
async fn main() {
    match try_main().await {
        Ok(_) => info!("catalog service shutting down"),
        Err(e) => {
            error!("catalog service exited with error: {e:?}");
        }
    }
}

fn init_logging() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("CATALOG_LOG"))
        .init();
}

async fn try_main() -> AppResult<()> {
    init_logging();

    if let Err(e) = dotenv() {
        warn!("failed to load .env file: {e}");
    }

    let settings = Settings::from_env()?;
    debug!(?settings, "loaded settings");

    let routes = build_routes(&settings);

    app::run(routes, settings.app_properties()).await
}

fn build_routes(settings: &Settings) -> Router {
    debug!("building routes..");
    let categories = CatalogEngine::new(CategoryInMemoryRepository::new());
    let accounts = CatalogEngine::new(AccountInMemoryRepository::new());

    catalog_routes::routes::build(
        CatalogAppState::new(categories, accounts),
        &settings.api_prefix,
    )
}

#[derive(Debug, Clone)]
struct CatalogEngine<T> {
    repo: T,
}

impl<T> CatalogEngine<T> {
    fn new(repo: T) -> Self {
        Self { repo }
    }
}

impl<T> categories_core::CategoryEngine for CatalogEngine<T>
where
    T: CategoryRepository + Clone,
{
    type Repo = T;

    fn repo(&self) -> Self::Repo {
        self.repo.clone()
    }
}

impl<T> accounts_core::AccountEngine for CatalogEngine<T>
where
    T: AccountRepository + Clone,
{
    type Repo = T;

    fn repo(&self) -> Self::Repo {
        self.repo.clone()
    }
}
