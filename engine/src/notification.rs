//! Per-entity accumulator of validation errors.
//!
//! Errors are grouped into buckets keyed by field name. Buckets keep the order
//! in which they were first written to and messages keep the order in which
//! they were added. Nothing is ever removed: a notification only grows, so
//! re-validating an entity adds to whatever an earlier validation left behind.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Bucket {
    Field { field: String, messages: Vec<String> },
    Bare(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    buckets: Vec<Bucket>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` under `field`, or as a bare message when no field is given.
    pub fn add_error(&mut self, message: impl Into<String>, field: Option<&str>) {
        let message = message.into();
        let Some(field) = field else {
            self.buckets.push(Bucket::Bare(message));
            return;
        };

        let existing = self.buckets.iter_mut().find_map(|bucket| match bucket {
            Bucket::Field { field: f, messages } if f == field => Some(messages),
            _ => None,
        });

        match existing {
            Some(messages) => messages.push(message),
            None => self.buckets.push(Bucket::Field {
                field: field.to_owned(),
                messages: vec![message],
            }),
        }
    }

    /// Builder form of [`Notification::add_error`].
    pub fn with_error(mut self, message: impl Into<String>, field: Option<&str>) -> Self {
        self.add_error(message, field);
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.buckets.is_empty()
    }

    /// Number of buckets; every bare message counts as its own bucket.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.buckets.iter().find_map(|bucket| match bucket {
            Bucket::Field { field: f, messages } if f == field => Some(messages.as_slice()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.buckets
                .iter()
                .map(|bucket| match bucket {
                    Bucket::Bare(message) => Value::String(message.clone()),
                    Bucket::Field { field, messages } => {
                        let mut object = Map::with_capacity(1);
                        object.insert(
                            field.clone(),
                            Value::Array(messages.iter().cloned().map(Value::String).collect()),
                        );
                        Value::Object(object)
                    }
                })
                .collect(),
        )
    }
}

impl Serialize for Notification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
