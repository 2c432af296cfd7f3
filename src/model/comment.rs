use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{FieldValue, Record};

/// A comment on a post. Replies nest recursively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub likes: u64,
    pub replies: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Number of comments in this thread, replies included.
    pub fn thread_len(&self) -> usize {
        1 + self.replies.iter().map(Comment::thread_len).sum::<usize>()
    }
}

impl Record for Comment {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "post_id" => Some(FieldValue::Text(self.post_id.to_string())),
            "author_id" => Some(FieldValue::Text(self.author_id.to_string())),
            "author_name" => Some(FieldValue::Text(self.author_name.clone())),
            "likes" => Some(FieldValue::Number(self.likes as f64)),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            "updated_at" => Some(FieldValue::Date(self.updated_at)),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.content, &self.author_name]
    }
}
