use crate::notification::Notification;
use std::borrow::Cow;

/// Outcome of one validation pass. The notification is handed back to the caller
/// together with whether this pass added anything to it.
#[derive(Debug)]
pub struct Validated {
    pub notification: Notification,
    pub valid: bool,
}

pub trait Validator<T> {
    /// Runs the checks belonging to `groups` (all of them when `None` or empty)
    /// against `data`, appending failures to `notification`.
    fn validate(&self, notification: Notification, data: &T, groups: Option<&[&str]>)
    -> Validated;
}

pub struct FieldRule<T> {
    field: &'static str,
    group: &'static str,
    check: fn(&T) -> bool,
    message: Cow<'static, str>,
}

impl<T> FieldRule<T> {
    /// A rule reported under `field` and run as part of the group of the same name.
    pub fn new(
        field: &'static str,
        check: fn(&T) -> bool,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field,
            group: field,
            check,
            message: message.into(),
        }
    }

    pub fn in_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }
}

/// Declarative table of field rules for one entity type.
pub struct RuleSet<T> {
    rules: Vec<FieldRule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(rules: Vec<FieldRule<T>>) -> Self {
        Self { rules }
    }

    pub fn groups(&self) -> impl Iterator<Item = &'static str> + '_ {
        let mut seen: Vec<&'static str> = Vec::with_capacity(self.rules.len());
        self.rules.iter().filter_map(move |rule| {
            if seen.contains(&rule.group) {
                None
            } else {
                seen.push(rule.group);
                Some(rule.group)
            }
        })
    }
}

impl<T> Validator<T> for RuleSet<T> {
    fn validate(
        &self,
        mut notification: Notification,
        data: &T,
        groups: Option<&[&str]>,
    ) -> Validated {
        let selected = |group: &str| match groups {
            Some(groups) if !groups.is_empty() => groups.iter().any(|g| *g == group),
            _ => true,
        };

        let mut valid = true;
        for rule in self.rules.iter().filter(|rule| selected(rule.group)) {
            if !(rule.check)(data) {
                valid = false;
                notification.add_error(rule.message.clone(), Some(rule.field));
            }
        }

        Validated {
            notification,
            valid,
        }
    }
}

/// Raised by callers that refuse to go past a persistence boundary with an
/// entity whose notification carries errors.
#[derive(Debug, thiserror::Error)]
#[error("Validation Error")]
pub struct EntityValidationError {
    errors: Notification,
}

impl EntityValidationError {
    pub fn new(errors: Notification) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &Notification {
        &self.errors
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Person {
        name: String,
        age: u8,
    }

    fn rules() -> RuleSet<Person> {
        RuleSet::new(vec![
            FieldRule::new("name", |p: &Person| !p.name.is_empty(), "name should not be empty"),
            FieldRule::new("name", |p: &Person| p.name.len() <= 5, "name is too long"),
            FieldRule::new("age", |p: &Person| p.age >= 18, "age must be at least 18"),
        ])
    }

    fn person(name: &str, age: u8) -> Person {
        Person {
            name: name.to_owned(),
            age,
        }
    }

    #[test]
    fn valid_data_adds_nothing() {
        let outcome = rules().validate(Notification::new(), &person("bob", 30), None);

        assert!(outcome.valid);
        assert!(!outcome.notification.has_errors());
    }

    #[test]
    fn all_groups_run_when_none_selected() {
        let outcome = rules().validate(Notification::new(), &person("", 3), None);

        assert!(!outcome.valid);
        assert_eq!(
            json!([
                { "name": ["name should not be empty"] },
                { "age": ["age must be at least 18"] }
            ]),
            outcome.notification.to_json()
        );
    }

    #[test]
    fn empty_group_selection_runs_all_groups() {
        let outcome = rules().validate(Notification::new(), &person("", 3), Some(&[][..]));
        assert_eq!(2, outcome.notification.len());
    }

    #[test]
    fn only_selected_groups_run() {
        let outcome =
            rules().validate(Notification::new(), &person("robert", 3), Some(&["name"][..]));

        assert!(!outcome.valid);
        assert_eq!(
            json!([{ "name": ["name is too long"] }]),
            outcome.notification.to_json()
        );
    }

    #[test]
    fn pass_reports_valid_even_if_notification_already_had_errors() {
        let earlier = Notification::new().with_error("age must be at least 18", Some("age"));
        let outcome = rules().validate(earlier, &person("bob", 3), Some(&["name"][..]));

        assert!(outcome.valid);
        assert!(outcome.notification.has_errors());
    }

    #[test]
    fn rules_can_share_a_group_across_fields() {
        let rules = RuleSet::new(vec![
            FieldRule::new("name", |p: &Person| !p.name.is_empty(), "required").in_group("profile"),
            FieldRule::new("age", |p: &Person| p.age > 0, "required").in_group("profile"),
        ]);

        let outcome = rules.validate(Notification::new(), &person("", 0), Some(&["profile"][..]));
        assert_eq!(2, outcome.notification.len());
        assert_eq!(vec!["profile"], rules.groups().collect::<Vec<_>>());
    }

    #[test]
    fn entity_validation_error_counts_buckets() {
        let error = EntityValidationError::new(
            Notification::new()
                .with_error("a", Some("name"))
                .with_error("b", Some("name"))
                .with_error("c", Some("description")),
        );

        assert_eq!(2, error.count());
        assert_eq!("Validation Error", error.to_string());
    }
}
