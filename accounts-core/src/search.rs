use crate::model::Account;
use engine::repository::in_memory::SearchPolicy;
use std::cmp::Ordering;

/// Filters on a case-insensitive email match. Unsorted searches keep insertion order.
pub struct AccountSearch;

impl SearchPolicy<Account> for AccountSearch {
    const SORTABLE_FIELDS: &'static [&'static str] = &["email", "created_at"];

    fn matches(item: &Account, filter: &str) -> bool {
        item.email().to_lowercase().contains(&filter.to_lowercase())
    }

    fn compare(a: &Account, b: &Account, field: &str) -> Ordering {
        match field {
            "email" => a.email().cmp(b.email()),
            "created_at" => a.created_at().cmp(&b.created_at()),
            _ => Ordering::Equal,
        }
    }
}
