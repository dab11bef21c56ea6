use crate::model::Category;
use engine::repository::in_memory::SearchPolicy;
use engine::search::SortDirection;
use std::cmp::Ordering;

/// Filters on a case-insensitive name match; newest first unless asked otherwise.
pub struct CategorySearch;

impl SearchPolicy<Category> for CategorySearch {
    const SORTABLE_FIELDS: &'static [&'static str] = &["name", "created_at"];

    fn matches(item: &Category, filter: &str) -> bool {
        item.name().to_lowercase().contains(&filter.to_lowercase())
    }

    fn compare(a: &Category, b: &Category, field: &str) -> Ordering {
        match field {
            "name" => a.name().cmp(b.name()),
            "created_at" => a.created_at().cmp(&b.created_at()),
            _ => Ordering::Equal,
        }
    }

    fn default_sort() -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}
