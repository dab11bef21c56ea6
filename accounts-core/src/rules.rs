use crate::model::Account;
use engine::validation::{FieldRule, RuleSet};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    ))
    .expect("valid email regex")
});

pub fn is_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

pub fn account_rules() -> RuleSet<Account> {
    RuleSet::new(vec![FieldRule::new(
        "email",
        |a: &Account| is_email(a.email()),
        "email must be an email",
    )])
}
