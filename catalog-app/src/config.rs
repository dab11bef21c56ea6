use engine::app::{AppError, AppProperties, AppResult};
use error_stack::{Report, ResultExt};

pub const PORT_VAR: &str = "CATALOG_PORT";
pub const API_PREFIX_VAR: &str = "CATALOG_API_PREFIX";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub api_prefix: String,
}

impl Settings {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let port = match lookup(PORT_VAR) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .change_context(AppError)
                .attach(format!("{PORT_VAR} must be a port number, got '{raw}'"))?,
        };

        let api_prefix = lookup(API_PREFIX_VAR)
            .map(|prefix| normalize_prefix(&prefix))
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_owned());

        if port == 0 {
            return Err(Report::new(AppError).attach(format!("{PORT_VAR} cannot be 0")));
        }

        Ok(Self { port, api_prefix })
    }

    pub fn app_properties(&self) -> AppProperties {
        AppProperties {
            port: self.port,
            ..AppProperties::default()
        }
    }
}

/// `api/` and `/api` both become `/api`; a blank prefix serves from the root.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppResult<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(
            Settings {
                port: 8000,
                api_prefix: "/api".to_owned()
            },
            settings(&[]).unwrap()
        );
    }

    #[test]
    fn reads_port_and_prefix() {
        let settings = settings(&[(PORT_VAR, "3001"), (API_PREFIX_VAR, "/v1")]).unwrap();

        assert_eq!(3001, settings.port);
        assert_eq!("/v1", settings.api_prefix);
        assert_eq!(3001, settings.app_properties().port);
    }

    #[rstest]
    #[case::not_a_number("http")]
    #[case::negative("-1")]
    #[case::too_big("70000")]
    #[case::zero("0")]
    fn bad_port_is_an_error(#[case] port: &str) {
        assert!(settings(&[(PORT_VAR, port)]).is_err());
    }

    #[rstest]
    #[case::missing_leading_slash("api", "/api")]
    #[case::trailing_slash("/api/", "/api")]
    #[case::root("/", "")]
    #[case::blank("  ", "")]
    fn prefix_is_normalized(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(expected, normalize_prefix(raw));
    }
}
