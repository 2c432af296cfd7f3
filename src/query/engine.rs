use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::trace;

use crate::core::types::{FieldValue, Record};
use crate::query::descriptor::{DEFAULT_LIMIT, DEFAULT_PAGE, QueryDescriptor, SortOrder};
use crate::query::results::QueryResult;

/// Run one list query over an in-memory collection: search, equality
/// filters, stable sort, then pagination.
///
/// Pure with respect to `records`: the slice is never reordered or
/// mutated, and only the records on the returned page are cloned.
/// A zero `page` or `limit` is clamped to the defaults; paging past the
/// end yields an empty page, not an error.
pub fn query<R: Record + Clone>(records: &[R], descriptor: &QueryDescriptor) -> QueryResult<R> {
    let page = if descriptor.page == 0 { DEFAULT_PAGE } else { descriptor.page };
    let limit = if descriptor.limit == 0 { DEFAULT_LIMIT } else { descriptor.limit };

    // Lowercase the search term once, up front. Whitespace-only input
    // means "no search".
    let search = descriptor
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut matches: Vec<&R> = Vec::new();
    for record in records {
        if let Some(term) = &search {
            if !matches_search(record, term) {
                continue;
            }
        }
        if !matches_filters(record, &descriptor.filters) {
            continue;
        }
        matches.push(record);
    }

    sort_matches(&mut matches, &descriptor.sort_by, descriptor.sort_order);

    let total = matches.len();
    let start = (page - 1).saturating_mul(limit);
    let data: Vec<R> = matches
        .iter()
        .skip(start)
        .take(limit)
        .map(|record| (*record).clone())
        .collect();

    trace!(total, page, limit, sort_by = %descriptor.sort_by, "list query executed");

    QueryResult::new(data, total, page, limit)
}

/// Search predicate: case-insensitive substring over the record's
/// searchable text fields, or over any of its tags. `term` is already
/// trimmed and lowercased.
fn matches_search<R: Record>(record: &R, term: &str) -> bool {
    if record
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(term))
    {
        return true;
    }
    record
        .search_tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(term))
}

/// Equality filters are conjunctive: every entry must match exactly.
/// A record without the field never matches.
fn matches_filters<R: Record>(record: &R, filters: &HashMap<String, FieldValue>) -> bool {
    filters
        .iter()
        .all(|(field, expected)| record.field(field).as_ref() == Some(expected))
}

/// Stable sort by a named field. Pairs the comparator cannot order
/// (mixed types, absent field) keep their incoming relative order.
/// Descending reverses the comparator, not the output, so ties stay
/// stable either way.
fn sort_matches<R: Record>(matches: &mut [&R], sort_by: &str, order: SortOrder) {
    matches.sort_by(|a, b| {
        let ordering = compare_values(a.field(sort_by), b.field(sort_by));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_values(a: Option<FieldValue>, b: Option<FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => compare_text(&a, &b),
        (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Date(a)), Some(FieldValue::Date(b))) => a.cmp(&b),
        (Some(FieldValue::Boolean(a)), Some(FieldValue::Boolean(b))) => a.cmp(&b),
        // Mixed types or absent field: unordered, keep incoming order.
        _ => Ordering::Equal,
    }
}

/// Case-insensitive lexicographic comparison with a case-sensitive
/// tie-break, standing in for locale collation.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        title: String,
        tags: Vec<String>,
        views: Option<f64>,
        created_at: chrono::DateTime<Utc>,
    }

    impl Record for Item {
        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "title" => Some(FieldValue::Text(self.title.clone())),
                "views" => self.views.map(FieldValue::Number),
                "created_at" => Some(FieldValue::Date(self.created_at)),
                _ => None,
            }
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.title]
        }

        fn search_tags(&self) -> &[String] {
            &self.tags
        }
    }

    fn item(name: &'static str, title: &str, views: Option<f64>, day: u32) -> Item {
        Item {
            name,
            title: title.to_string(),
            tags: Vec::new(),
            views,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn names(result: &QueryResult<Item>) -> Vec<&'static str> {
        result.data.iter().map(|i| i.name).collect()
    }

    #[test]
    fn zero_page_and_limit_clamp_to_defaults() {
        let items = vec![item("a", "One", Some(1.0), 1)];
        let result = query(&items, &QueryDescriptor::new().with_page(0, 0));
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 10);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn unknown_sort_field_keeps_incoming_order() {
        let items = vec![
            item("a", "One", Some(3.0), 1),
            item("b", "Two", Some(1.0), 2),
            item("c", "Three", Some(2.0), 3),
        ];
        let result = query(&items, &QueryDescriptor::new().with_sort("nonsense", SortOrder::Asc));
        assert_eq!(names(&result), ["a", "b", "c"]);
    }

    #[test]
    fn partially_absent_sort_field_is_tolerated() {
        let items = vec![
            item("a", "One", Some(3.0), 1),
            item("b", "Two", None, 2),
            item("c", "Three", Some(1.0), 3),
        ];
        // A record without the sort field compares equal to everything,
        // so the exact order is whatever the stable sort settles on.
        // What must hold: nothing is lost, and the result is
        // deterministic.
        let d = QueryDescriptor::new().with_sort("views", SortOrder::Asc);
        let first = query(&items, &d);
        let second = query(&items, &d);
        assert_eq!(first.total, 3);
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn text_sort_ignores_case() {
        let items = vec![
            item("a", "banana", None, 1),
            item("b", "Apple", None, 2),
            item("c", "cherry", None, 3),
        ];
        let result = query(&items, &QueryDescriptor::new().with_sort("title", SortOrder::Asc));
        assert_eq!(names(&result), ["b", "a", "c"]);
    }

    #[test]
    fn search_matches_tags_as_well_as_text() {
        let mut tagged = item("a", "Unrelated", None, 1);
        tagged.tags = vec!["Rust".to_string(), "systems".to_string()];
        let items = vec![tagged, item("b", "Also unrelated", None, 2)];
        let result = query(&items, &QueryDescriptor::new().with_search("rust"));
        assert_eq!(names(&result), ["a"]);
    }

    #[test]
    fn whitespace_search_is_no_search() {
        let items = vec![item("a", "One", None, 1), item("b", "Two", None, 2)];
        let result = query(&items, &QueryDescriptor::new().with_search("   "));
        assert_eq!(result.total, 2);
    }

    #[test]
    fn filter_on_missing_field_matches_nothing() {
        let items = vec![item("a", "One", None, 1)];
        let d = QueryDescriptor::new().with_filter("views", FieldValue::Number(1.0));
        assert_eq!(query(&items, &d).total, 0);
    }

    #[test]
    fn filter_equality_is_type_sensitive() {
        let items = vec![item("a", "10", Some(10.0), 1)];
        // Text "10" on a numeric field must not match.
        let d = QueryDescriptor::new().with_filter("views", FieldValue::text("10"));
        assert_eq!(query(&items, &d).total, 0);
        let d = QueryDescriptor::new().with_filter("views", FieldValue::Number(10.0));
        assert_eq!(query(&items, &d).total, 1);
    }

    #[test]
    fn input_slice_is_not_reordered() {
        let items = vec![
            item("a", "One", Some(3.0), 1),
            item("b", "Two", Some(1.0), 2),
        ];
        let before = items.clone();
        let _ = query(&items, &QueryDescriptor::new().with_sort("views", SortOrder::Asc));
        assert_eq!(items, before);
    }
}
