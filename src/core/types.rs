use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scalar field value extracted from a record for filtering or sorting.
///
/// Equality is exact and type-sensitive: a `Text` never equals a `Number`,
/// and `Text("published")` only equals `Text("published")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// A record that can be listed by the query engine.
///
/// Instead of arbitrary dynamic property access, each record type exposes
/// an enumerated set of named fields through a typed accessor. Sorting or
/// filtering by a name outside that set is a no-op, not an error.
pub trait Record {
    /// Typed accessor for the record's sortable/filterable fields.
    /// Unknown names return `None`.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Text fields scanned by the search predicate.
    fn search_text(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Tag-like values scanned by the search predicate.
    fn search_tags(&self) -> &[String] {
        &[]
    }
}
