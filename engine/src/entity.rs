use crate::notification::Notification;
use serde_json::Value;
use std::fmt::{Debug, Display};

/// A domain object with an identity and an attached notification.
///
/// Two entities are the same entity when their ids are equal, regardless of the
/// rest of their state.
pub trait Entity {
    /// Type name reported in not-found errors.
    const NAME: &'static str;
    type Id: Debug + Display + Clone + PartialEq + Send + Sync + 'static;

    fn entity_id(&self) -> &Self::Id;
    fn notification(&self) -> &Notification;
    fn to_json(&self) -> Value;

    fn same_identity(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }
}

pub trait Validatable: Entity {
    /// Re-runs the entity's rules for `groups` (all groups when `None`).
    /// Returns whether this pass found nothing wrong; errors from earlier passes
    /// stay on the notification either way.
    fn validate(&mut self, groups: Option<&[&str]>) -> bool;
}
