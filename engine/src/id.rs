use error_stack::Report;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::{Uuid, Variant};

const HYPHENATED_LEN: usize = 36;

#[derive(Debug, thiserror::Error)]
#[error("ID must be a valid UUID!")]
pub struct InvalidIdentifier;

/// Value-equal wrapper around a hyphenated RFC-4122 UUID.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(transparent)]
#[serde(transparent)]
#[schema(value_type = String, format = Uuid)]
pub struct Identifier(Uuid);

impl Identifier {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn parse(id: &str) -> Result<Self, Report<InvalidIdentifier>> {
        if id.len() != HYPHENATED_LEN {
            return Err(Report::new(InvalidIdentifier).attach(format!("received '{id}'")));
        }

        let uuid = Uuid::parse_str(id)
            .map_err(|e| Report::new(InvalidIdentifier).attach(format!("received '{id}': {e}")))?;

        if !is_rfc4122(&uuid) {
            return Err(Report::new(InvalidIdentifier)
                .attach(format!("received '{id}': not an RFC 4122 variant or version")));
        }

        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Nil, or RFC 4122 variant with a version from 1 to 8.
fn is_rfc4122(uuid: &Uuid) -> bool {
    uuid.is_nil()
        || (uuid.get_variant() == Variant::RFC4122
            && (1..=8).contains(&uuid.get_version_num()))
}

impl Default for Identifier {
    fn default() -> Self {
        Self::generate()
    }
}

impl FromStr for Identifier {
    type Err = Report<InvalidIdentifier>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|_| serde::de::Error::custom(InvalidIdentifier))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
