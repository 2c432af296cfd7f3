use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::FieldValue;

/// Page number used when a descriptor carries zero.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when a descriptor carries zero.
pub const DEFAULT_LIMIT: usize = 10;
/// Field sorted by when the caller doesn't pick one.
pub const DEFAULT_SORT_FIELD: &str = "created_at";

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc, // Ascending: 0 → 9, A → Z
    #[default]
    Desc, // Descending: 9 → 0, Z → A
}

/// One list query: search term, equality filters, sort key and page window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub page: usize,
    pub limit: usize,
    /// Case-insensitive substring search; empty or whitespace-only
    /// means "no search".
    pub search: Option<String>,
    /// Exact-match constraints, combined with AND.
    pub filters: HashMap<String, FieldValue>,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        QueryDescriptor {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            filters: HashMap::new(),
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.filters.insert(field.into(), value);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = field.into();
        self.sort_order = order;
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self::new()
    }
}
