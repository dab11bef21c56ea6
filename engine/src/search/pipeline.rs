//! The three stages of an in-memory search: filter, sort, then paginate.
//! Each stage works on its own copy and never reorders the caller's collection.

use crate::search::SortDirection;
use std::cmp::Ordering;

/// Keeps the items `predicate` accepts, in their original order. Without a
/// filter every item is kept.
pub fn apply_filter<E, P>(items: &[E], filter: Option<&str>, predicate: P) -> Vec<E>
where
    E: Clone,
    P: Fn(&E, &str) -> bool,
{
    match filter {
        None => items.to_vec(),
        Some(filter) => items
            .iter()
            .filter(|item| predicate(item, filter))
            .cloned()
            .collect(),
    }
}

/// Sorts by `sort` when it names one of `sortable`; anything else leaves the
/// order untouched. Items comparing equal keep their relative order in both
/// directions.
pub fn apply_sort<E, C>(
    mut items: Vec<E>,
    sort: Option<&str>,
    sort_dir: Option<SortDirection>,
    sortable: &[&str],
    compare: C,
) -> Vec<E>
where
    C: Fn(&E, &E, &str) -> Ordering,
{
    let Some(field) = sort.filter(|field| sortable.iter().any(|s| s == field)) else {
        return items;
    };

    match sort_dir.unwrap_or_default() {
        SortDirection::Asc => items.sort_by(|a, b| compare(a, b, field)),
        SortDirection::Desc => items.sort_by(|a, b| compare(a, b, field).reverse()),
    }
    items
}

/// Window `[(page - 1) * per_page, page * per_page)`; pages past the end are empty.
pub fn apply_paginate<E>(items: Vec<E>, page: u64, per_page: u64) -> Vec<E> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let take = usize::try_from(per_page).unwrap_or(usize::MAX);

    items.into_iter().skip(start).take(take).collect()
}
