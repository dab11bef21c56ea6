use crate::routes::responses::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use engine::error::ReportResponse;
use engine::repository::RepoError;
use engine::validation::EntityValidationError;
use error_stack::Report;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum CategoryServiceError {
    #[error("category not found")]
    NotFound,
    #[error("category id is malformed")]
    InvalidId,
    #[error("category failed validation")]
    Validation,
    #[error("category service failed")]
    Repository,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum AccountServiceError {
    #[error("account not found")]
    NotFound,
    #[error("account id is malformed")]
    InvalidId,
    #[error("account failed validation")]
    Validation,
    #[error("account service failed")]
    Repository,
}

/// Common shape of the service error enums.
pub trait ServiceErrorKind: Sized {
    const NOT_FOUND: Self;
    const REPOSITORY: Self;

    fn status(&self) -> StatusCode;

    fn from_repo(report: Report<RepoError>) -> Report<Self>
    where
        Self: std::error::Error + Send + Sync + 'static,
    {
        let context = match report.current_context() {
            RepoError::NotFound { .. } => Self::NOT_FOUND,
            _ => Self::REPOSITORY,
        };
        report.change_context(context)
    }
}

impl ServiceErrorKind for CategoryServiceError {
    const NOT_FOUND: Self = CategoryServiceError::NotFound;
    const REPOSITORY: Self = CategoryServiceError::Repository;

    fn status(&self) -> StatusCode {
        match self {
            CategoryServiceError::NotFound => StatusCode::NOT_FOUND,
            CategoryServiceError::InvalidId | CategoryServiceError::Validation => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CategoryServiceError::Repository => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ServiceErrorKind for AccountServiceError {
    const NOT_FOUND: Self = AccountServiceError::NotFound;
    const REPOSITORY: Self = AccountServiceError::Repository;

    fn status(&self) -> StatusCode {
        match self {
            AccountServiceError::NotFound => StatusCode::NOT_FOUND,
            AccountServiceError::InvalidId | AccountServiceError::Validation => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AccountServiceError::Repository => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Builds the client-facing body. The message comes from the deepest context
/// that says something useful to a caller; server errors stay opaque.
fn render<C>(report: &Report<C>) -> Response
where
    C: ServiceErrorKind + std::error::Error + Send + Sync + 'static,
{
    let status = report.current_context().status();

    if let Some(validation) = report.downcast_ref::<EntityValidationError>() {
        return ApiError::with_errors(status, validation.to_string(), validation.errors().to_json())
            .into_response();
    }

    let message = if status.is_server_error() {
        "internal server error".to_owned()
    } else if let Some(repo) = report.downcast_ref::<RepoError>() {
        repo.to_string()
    } else if let Some(id) = report.downcast_ref::<engine::InvalidIdentifier>() {
        id.to_string()
    } else {
        report.current_context().to_string()
    };

    ApiError::new(status, message).into_response()
}

impl ReportResponse for CategoryServiceError {
    fn response(report: &Report<Self>) -> Response {
        render(report)
    }
}

impl ReportResponse for AccountServiceError {
    fn response(report: &Report<Self>) -> Response {
        render(report)
    }
}
