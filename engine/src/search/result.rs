use serde::Serialize;

/// One page of search output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
}

impl<E> SearchResult<E> {
    /// `total` counts every match before pagination; `items` is the current page only.
    pub fn new(items: Vec<E>, total: u64, current_page: u64, per_page: u64) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            total.div_ceil(per_page).max(1)
        };

        Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn map_items<T, F>(self, f: F) -> SearchResult<T>
    where
        F: FnMut(E) -> T,
    {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn serializes_with_last_page() {
        let result = SearchResult::new(vec!["entity1", "entity2"], 4, 1, 2);

        assert_eq!(
            json!({
                "items": ["entity1", "entity2"],
                "total": 4,
                "currentPage": 1,
                "perPage": 2,
                "lastPage": 2,
            }),
            serde_json::to_value(&result).unwrap()
        );
    }

    #[rstest]
    #[case::per_page_larger_than_total(4, 15, 1)]
    #[case::not_a_multiple(101, 20, 6)]
    #[case::exact_multiple(100, 20, 5)]
    #[case::empty(0, 15, 1)]
    #[case::zero_per_page(10, 0, 1)]
    fn last_page(#[case] total: u64, #[case] per_page: u64, #[case] expected: u64) {
        let result = SearchResult::<()>::new(vec![], total, 1, per_page);
        assert_eq!(expected, result.last_page());
    }

    #[test]
    fn map_items_keeps_page_info() {
        let result = SearchResult::new(vec![1, 2], 7, 2, 2).map_items(|i| i * 10);

        assert_eq!(&[10, 20], result.items());
        assert_eq!(7, result.total());
        assert_eq!(2, result.current_page());
        assert_eq!(2, result.per_page());
        assert_eq!(4, result.last_page());
    }
}
