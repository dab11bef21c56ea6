use engine::patch_field_schema;
use optional_field::{Field, serde_optional_fields};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryPatchRequest {
    /// The new name. If null or not specified, no update will happen.
    pub name: Option<String>,
    /// The new description. If specified as null, the description is cleared.
    /// If not specified, no update will happen.
    #[schema(schema_with = patch_field_schema)]
    pub description: Field<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeEmailRequest {
    pub email: String,
}
