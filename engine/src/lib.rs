pub mod app;
pub mod entity;
pub mod error;
pub mod id;
pub mod notification;
pub mod repository;
pub mod search;
pub mod validation;

pub use entity::{Entity, Validatable};
pub use id::{Identifier, InvalidIdentifier};
pub use notification::Notification;

use utoipa::openapi::RefOr;
use utoipa::openapi::schema::Schema;

/// OpenAPI schema for a PATCH field that may be absent, null or set.
pub fn patch_field_schema() -> impl Into<RefOr<Schema>> {
    <Option<String> as utoipa::PartialSchema>::schema()
}
