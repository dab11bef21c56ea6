use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Largest integer an f64 represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Copy, Clone, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn coerce(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::String(s)) if s.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Query input exactly as a caller handed it over. Any field may be missing or
/// hold a value of the wrong type.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct RawSearchInput {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default)]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub sort: Option<Value>,
    #[serde(default)]
    pub sort_dir: Option<Value>,
    #[serde(default)]
    pub filter: Option<Value>,
}

impl RawSearchInput {
    /// Collects query-string pairs. The first value given for a key wins and
    /// unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut raw.page,
                "per_page" => &mut raw.per_page,
                "sort" => &mut raw.sort,
                "sort_dir" => &mut raw.sort_dir,
                "filter" => &mut raw.filter,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(Value::String(value.into()));
            }
        }
        raw
    }
}

/// Normalized search query. Construction never fails: malformed input falls
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(raw: &RawSearchInput) -> Self {
        let sort = stringify(raw.sort.as_ref());
        let sort_dir = sort
            .as_ref()
            .map(|_| SortDirection::coerce(raw.sort_dir.as_ref()));

        Self {
            page: positive_integer(raw.page.as_ref()).unwrap_or(DEFAULT_PAGE),
            per_page: positive_integer(raw.per_page.as_ref()).unwrap_or(DEFAULT_PER_PAGE),
            sort,
            sort_dir,
            filter: stringify(raw.filter.as_ref()),
        }
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page
        };
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        let field = field.into();
        if field.is_empty() {
            self.sort = None;
            self.sort_dir = None;
        } else {
            self.sort = Some(field);
            self.sort_dir = Some(direction);
        }
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Only present when a sort field is.
    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl From<RawSearchInput> for SearchParams {
    fn from(value: RawSearchInput) -> Self {
        Self::normalize(&value)
    }
}

fn positive_integer(raw: Option<&Value>) -> Option<u64> {
    let number = match raw? {
        Value::Number(n) => match n.as_u64() {
            Some(n) => return (n > 0).then_some(n),
            None => n.as_f64()?,
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    if number.is_finite() && number >= 1.0 && number.fract() == 0.0 && number <= MAX_EXACT_INTEGER {
        Some(number as u64)
    } else {
        None
    }
}

/// Non-string values become their JSON text, so an object is `"{}"` rather
/// than an opaque object tag.
fn stringify(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn with_page(page: Value) -> RawSearchInput {
        RawSearchInput {
            page: Some(page),
            ..Default::default()
        }
    }

    fn with_per_page(per_page: Value) -> RawSearchInput {
        RawSearchInput {
            per_page: Some(per_page),
            ..Default::default()
        }
    }

    #[test]
    fn defaults() {
        let params = SearchParams::normalize(&RawSearchInput::default());

        assert_eq!(SearchParams::new(), params);
        assert_eq!(1, params.page());
        assert_eq!(15, params.per_page());
        assert_eq!(None, params.sort());
        assert_eq!(None, params.sort_dir());
        assert_eq!(None, params.filter());
    }

    #[rstest]
    #[case::null(json!(null), 1)]
    #[case::empty_string(json!(""), 1)]
    #[case::non_numeric(json!("fake"), 1)]
    #[case::zero(json!(0), 1)]
    #[case::negative(json!(-1), 1)]
    #[case::fractional(json!(5.5), 1)]
    #[case::fractional_string(json!("5.5"), 1)]
    #[case::bool_true(json!(true), 1)]
    #[case::bool_false(json!(false), 1)]
    #[case::object(json!({}), 1)]
    #[case::array(json!([2]), 1)]
    #[case::one(json!(1), 1)]
    #[case::two(json!(2), 2)]
    #[case::numeric_string(json!("2"), 2)]
    #[case::padded_numeric_string(json!(" 3 "), 3)]
    #[case::whole_float(json!(4.0), 4)]
    fn page_is_coerced(#[case] raw: Value, #[case] expected: u64) {
        assert_eq!(expected, SearchParams::normalize(&with_page(raw)).page());
    }

    #[rstest]
    #[case::null(json!(null), 15)]
    #[case::empty_string(json!(""), 15)]
    #[case::non_numeric(json!("fake"), 15)]
    #[case::zero(json!(0), 15)]
    #[case::negative(json!(-1), 15)]
    #[case::fractional(json!(5.5), 15)]
    #[case::bool_true(json!(true), 15)]
    #[case::bool_false(json!(false), 15)]
    #[case::object(json!({}), 15)]
    #[case::infinite_string(json!("inf"), 15)]
    #[case::one(json!(1), 1)]
    #[case::two(json!(2), 2)]
    #[case::ten(json!(10), 10)]
    fn per_page_is_coerced(#[case] raw: Value, #[case] expected: u64) {
        assert_eq!(expected, SearchParams::normalize(&with_per_page(raw)).per_page());
    }

    #[rstest]
    #[case::null(json!(null), None)]
    #[case::empty_string(json!(""), None)]
    #[case::zero(json!(0), Some("0"))]
    #[case::negative(json!(-1), Some("-1"))]
    #[case::fractional(json!(5.5), Some("5.5"))]
    #[case::bool_true(json!(true), Some("true"))]
    #[case::bool_false(json!(false), Some("false"))]
    #[case::object(json!({}), Some("{}"))]
    #[case::field(json!("field"), Some("field"))]
    fn sort_is_stringified(#[case] raw: Value, #[case] expected: Option<&str>) {
        let params = SearchParams::normalize(&RawSearchInput {
            sort: Some(raw),
            ..Default::default()
        });
        assert_eq!(expected, params.sort());
    }

    #[rstest]
    #[case::missing(None)]
    #[case::null(Some(json!(null)))]
    #[case::empty(Some(json!("")))]
    fn sort_dir_is_absent_without_sort(#[case] sort: Option<Value>) {
        let params = SearchParams::normalize(&RawSearchInput {
            sort,
            sort_dir: Some(json!("desc")),
            ..Default::default()
        });
        assert_eq!(None, params.sort_dir());
    }

    #[rstest]
    #[case::null(Some(json!(null)), SortDirection::Asc)]
    #[case::missing(None, SortDirection::Asc)]
    #[case::empty(Some(json!("")), SortDirection::Asc)]
    #[case::number(Some(json!(0)), SortDirection::Asc)]
    #[case::unknown(Some(json!("fake")), SortDirection::Asc)]
    #[case::asc(Some(json!("asc")), SortDirection::Asc)]
    #[case::asc_upper(Some(json!("ASC")), SortDirection::Asc)]
    #[case::desc(Some(json!("desc")), SortDirection::Desc)]
    #[case::desc_upper(Some(json!("DESC")), SortDirection::Desc)]
    #[case::desc_mixed(Some(json!("DeSc")), SortDirection::Desc)]
    fn sort_dir_is_coerced(#[case] raw: Option<Value>, #[case] expected: SortDirection) {
        let params = SearchParams::normalize(&RawSearchInput {
            sort: Some(json!("field")),
            sort_dir: raw,
            ..Default::default()
        });
        assert_eq!(Some(expected), params.sort_dir());
    }

    #[rstest]
    #[case::null(json!(null), None)]
    #[case::empty_string(json!(""), None)]
    #[case::zero(json!(0), Some("0"))]
    #[case::negative(json!(-1), Some("-1"))]
    #[case::fractional(json!(5.5), Some("5.5"))]
    #[case::bool_true(json!(true), Some("true"))]
    #[case::bool_false(json!(false), Some("false"))]
    #[case::object(json!({}), Some("{}"))]
    #[case::text(json!("field"), Some("field"))]
    fn filter_is_stringified(#[case] raw: Value, #[case] expected: Option<&str>) {
        let params = SearchParams::normalize(&RawSearchInput {
            filter: Some(raw),
            ..Default::default()
        });
        assert_eq!(expected, params.filter());
    }

    #[test]
    fn builder_applies_same_coercions() {
        let params = SearchParams::new()
            .with_page(0)
            .with_per_page(0)
            .with_sort("", SortDirection::Desc)
            .with_filter("");
        assert_eq!(SearchParams::new(), params);

        let params = SearchParams::new()
            .with_page(3)
            .with_per_page(2)
            .with_sort("name", SortDirection::Desc)
            .with_filter("a");
        assert_eq!(3, params.page());
        assert_eq!(2, params.per_page());
        assert_eq!(Some("name"), params.sort());
        assert_eq!(Some(SortDirection::Desc), params.sort_dir());
        assert_eq!(Some("a"), params.filter());
    }

    #[test]
    fn first_repeated_query_value_wins() {
        let raw = RawSearchInput::from_pairs([
            ("page", "2"),
            ("page", "5"),
            ("unknown", "x"),
            ("sort", "name"),
            ("sort_dir", "DESC"),
            ("sort_dir", "asc"),
        ]);

        let params = SearchParams::normalize(&raw);

        assert_eq!(2, params.page());
        assert_eq!(DEFAULT_PER_PAGE, params.per_page());
        assert_eq!(Some("name"), params.sort());
        assert_eq!(Some(SortDirection::Desc), params.sort_dir());
        assert_eq!(None, params.filter());
    }

    #[test]
    fn deserializes_from_query_string_values() {
        let raw: RawSearchInput = serde_json::from_value(json!({
            "page": "2",
            "per_page": "abc",
            "sort": "name",
            "sort_dir": "DESC",
        }))
        .unwrap();

        let params = SearchParams::from(raw);
        assert_eq!(2, params.page());
        assert_eq!(15, params.per_page());
        assert_eq!(Some("name"), params.sort());
        assert_eq!(Some(SortDirection::Desc), params.sort_dir());
        assert_eq!(None, params.filter());
    }
}
