use serde::{Deserialize, Serialize};

use crate::core::types::{FieldValue, Record};

/// A content category. The id doubles as the URL slug; `post_count`
/// tracks published posts and is refreshed by the category store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub post_count: usize,
    pub is_active: bool,
}

impl Record for Category {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "post_count" => Some(FieldValue::Number(self.post_count as f64)),
            "is_active" => Some(FieldValue::Boolean(self.is_active)),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

/// Partial category update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
