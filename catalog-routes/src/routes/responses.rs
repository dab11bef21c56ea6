use accounts_core::Account;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use categories_core::Category;
use chrono::{DateTime, Utc};
use engine::Identifier;
use engine::search::SearchResult;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    #[serde(skip)]
    status_code: StatusCode,
    id: Identifier,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl CategoryResponse {
    pub fn ok(category: Category) -> Self {
        Self::with_status(StatusCode::OK, category)
    }

    pub fn created(category: Category) -> Self {
        Self::with_status(StatusCode::CREATED, category)
    }

    fn with_status(status_code: StatusCode, category: Category) -> Self {
        Self {
            status_code,
            id: *category.category_id(),
            name: category.name().to_owned(),
            description: category.description().map(str::to_owned),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl IntoResponse for CategoryResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    #[serde(skip)]
    status_code: StatusCode,
    id: Identifier,
    email: String,
    profile_id: Identifier,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountResponse {
    pub fn ok(account: Account) -> Self {
        Self::with_status(StatusCode::OK, account)
    }

    pub fn created(account: Account) -> Self {
        Self::with_status(StatusCode::CREATED, account)
    }

    fn with_status(status_code: StatusCode, account: Account) -> Self {
        Self {
            status_code,
            id: *account.id(),
            email: account.email().to_owned(),
            profile_id: *account.profile_id(),
            created_at: account.created_at(),
            updated_at: account.updated_at(),
        }
    }
}

impl IntoResponse for AccountResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct PageMeta {
    current_page: u64,
    per_page: u64,
    last_page: u64,
    total: u64,
}

/// A page of search output in the `{data, meta}` envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse<T> {
    data: Vec<T>,
    meta: PageMeta,
}

impl<T> CollectionResponse<T> {
    pub fn from_search<E>(result: SearchResult<E>, present: impl FnMut(E) -> T) -> Self {
        let meta = PageMeta {
            current_page: result.current_page(),
            per_page: result.per_page(),
            last_page: result.last_page(),
            total: result.total(),
        };

        Self {
            data: result.into_items().into_iter().map(present).collect(),
            meta,
        }
    }
}

impl<T: Serialize> IntoResponse for CollectionResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub type ErrorMessageType = Cow<'static, str>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    #[serde(skip)]
    status_code: StatusCode,
    message: Cow<'static, str>,
    /// Validation errors: bare messages or `{field: [messages]}` objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    errors: Option<Value>,
}

impl ApiError {
    pub fn new(status_code: StatusCode, message: impl Into<ErrorMessageType>) -> Self {
        Self {
            status_code,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(
        status_code: StatusCode,
        message: impl Into<ErrorMessageType>,
        errors: Value,
    ) -> Self {
        Self {
            status_code,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use categories_core::CategoryProps;
    use serde_json::json;

    #[test]
    fn collection_envelope_carries_page_meta() {
        let result = SearchResult::new(
            vec![Category::new(CategoryProps::new("Movie"))],
            16,
            2,
            15,
        );

        let response = CollectionResponse::from_search(result, CategoryResponse::ok);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json!({ "current_page": 2, "per_page": 15, "last_page": 2, "total": 16 }),
            value["meta"]
        );
        assert_eq!(json!("Movie"), value["data"][0]["name"]);
        assert!(value["data"][0].get("status_code").is_none());
    }

    #[test]
    fn error_without_details_omits_errors() {
        let value = serde_json::to_value(ApiError::new(StatusCode::NOT_FOUND, "gone")).unwrap();
        assert_eq!(json!({ "message": "gone" }), value);
    }
}
