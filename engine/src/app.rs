use axum::Router;
use axum::response::Response;
use error_stack::{Report, ResultExt};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{Span, info};

pub struct AppProperties {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppProperties {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("the app exited with an error")]
pub struct AppError;

pub type AppResult<T> = Result<T, Report<AppError>>;

pub async fn run(routes: Router, properties: AppProperties) -> AppResult<()> {
    let listener = build_listener(properties.host, properties.port).await?;

    let routes = routes.layer(ServiceBuilder::new().layer(
        TraceLayer::new_for_http().on_response(
            |res: &Response, latency: Duration, _span: &Span| {
                info!("returned {} in {}ms", res.status(), latency.as_millis());
            },
        ),
    ));

    info!(
        "starting up catalog service on port {}",
        listener.local_addr().change_context(AppError)?.port()
    );

    serve_on(listener, routes).await
}

async fn serve_on(listener: TcpListener, routes: Router) -> AppResult<()> {
    axum::serve(listener, routes).await.change_context(AppError)
}

async fn build_listener(host: IpAddr, port: u16) -> AppResult<TcpListener> {
    TcpListener::bind(SocketAddr::new(host, port))
        .await
        .change_context(AppError)
        .attach(format!("failed to bind {host}:{port}"))
}
