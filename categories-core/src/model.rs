use crate::rules::category_rules;
use chrono::{DateTime, Utc};
use engine::validation::Validator;
use engine::{Entity, Identifier, Notification, Validatable};
use serde_json::{Value, json};

pub type CategoryId = Identifier;

const NAME_GROUP: &[&str] = &["name"];
const DESCRIPTION_GROUP: &[&str] = &["description"];

/// Everything needed to rebuild a category, e.g. from storage. Missing values
/// get defaults: a fresh id, no description, active, created now.
#[derive(Debug, Clone)]
pub struct CategoryProps {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category_id: None,
            name: name.into(),
            description: None,
            is_active: None,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl CreateCategory {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            is_active: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    notification: Notification,
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.category_id == other.category_id
    }
}

impl Eq for Category {}

impl Category {
    /// Builds a category without validating it.
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_else(Identifier::generate),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
            notification: Notification::new(),
        }
    }

    /// Builds and validates a new category. The category is returned even when
    /// invalid; check [`Entity::notification`] before persisting it.
    pub fn create(command: CreateCategory) -> Self {
        let mut category = Self::new(CategoryProps {
            category_id: None,
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            created_at: None,
        });
        category.validate(None);
        category
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(Some(NAME_GROUP));
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
        self.validate(Some(DESCRIPTION_GROUP));
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Category {
    const NAME: &'static str = "Category";
    type Id = CategoryId;

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn to_json(&self) -> Value {
        json!({
            "category_id": self.category_id,
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at,
        })
    }
}

impl Validatable for Category {
    fn validate(&mut self, groups: Option<&[&str]>) -> bool {
        let notification = std::mem::take(&mut self.notification);
        let outcome = category_rules().validate(notification, self, groups);
        self.notification = outcome.notification;
        outcome.valid
    }
}
