use axum::response::{IntoResponse, Response};
use error_stack::Report;
use std::error::Error;
use tracing::error;

/// Turns a failed endpoint's report into the HTTP response the client sees.
pub trait ReportResponse: Error + Send + Sync + Sized + 'static {
    fn response(report: &Report<Self>) -> Response;
}

#[derive(thiserror::Error)]
#[error("there was an error running the endpoint")]
pub struct EndpointError<T: Error + Send + Sync + 'static>(Report<T>);

impl<T: Error + Send + Sync + 'static> EndpointError<T> {
    pub fn report(&self) -> &Report<T> {
        &self.0
    }
}

impl<T: Error + Send + Sync + 'static> std::fmt::Debug for EndpointError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<Report<T>> for EndpointError<T>
where
    T: Error + Send + Sync + 'static,
{
    fn from(value: Report<T>) -> Self {
        Self(value)
    }
}

impl<T: ReportResponse> IntoResponse for EndpointError<T> {
    fn into_response(self) -> Response {
        let response = T::response(&self.0);
        if response.status().is_server_error() {
            error!("endpoint failed: {:?}", self.0);
        }
        response
    }
}
