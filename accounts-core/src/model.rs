use crate::rules::account_rules;
use chrono::{DateTime, Utc};
use engine::validation::Validator;
use engine::{Entity, Identifier, Notification, Validatable};
use serde_json::{Value, json};

pub type AccountId = Identifier;

const EMAIL_GROUP: &[&str] = &["email"];

#[derive(Debug, Clone)]
pub struct AccountProps {
    pub id: AccountId,
    pub email: String,
    pub profile_id: Identifier,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub id: Option<AccountId>,
    pub email: String,
    pub profile_id: Option<Identifier>,
}

impl CreateAccount {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            profile_id: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    email: String,
    profile_id: Identifier,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    notification: Notification,
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}

impl Account {
    pub fn new(props: AccountProps) -> Self {
        let created_at = props.created_at.unwrap_or_else(Utc::now);
        Self {
            id: props.id,
            email: props.email,
            profile_id: props.profile_id,
            created_at,
            updated_at: props.updated_at.unwrap_or(created_at),
            notification: Notification::new(),
        }
    }

    /// Builds and validates a new account, generating any id not supplied.
    pub fn create(command: CreateAccount) -> Self {
        let mut account = Self::new(AccountProps {
            id: command.id.unwrap_or_else(Identifier::generate),
            email: command.email,
            profile_id: command.profile_id.unwrap_or_else(Identifier::generate),
            created_at: None,
            updated_at: None,
        });
        account.validate(None);
        account
    }

    pub fn change_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.updated_at = Utc::now();
        self.validate(Some(EMAIL_GROUP));
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn profile_id(&self) -> &Identifier {
        &self.profile_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Account {
    const NAME: &'static str = "Account";
    type Id = AccountId;

    fn entity_id(&self) -> &Self::Id {
        &self.id
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "profile_id": self.profile_id,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Validatable for Account {
    fn validate(&mut self, groups: Option<&[&str]>) -> bool {
        let notification = std::mem::take(&mut self.notification);
        let outcome = account_rules().validate(notification, self, groups);
        self.notification = outcome.notification;
        outcome.valid
    }
}
