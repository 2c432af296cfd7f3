use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{FieldValue, Record};

/// Editorial lifecycle of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Pending,
    Published,
    Rejected,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Published => "published",
            PostStatus::Rejected => "rejected",
        }
    }
}

/// A blog post. Counters (`likes`, `comments`, `views`) and the derived
/// fields (`slug`, `excerpt`, `reading_time`, timestamps) are owned by
/// the post store; everything else comes from the author's draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub author_id: Uuid,
    pub category: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub featured: bool,
    pub likes: u64,
    pub comments: u64,
    pub views: u64,
    /// Estimated minutes to read.
    pub reading_time: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Record for Post {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "slug" => Some(FieldValue::Text(self.slug.clone())),
            "category" => Some(FieldValue::Text(self.category.clone())),
            "status" => Some(FieldValue::text(self.status.as_str())),
            "author_id" => Some(FieldValue::Text(self.author_id.to_string())),
            "featured" => Some(FieldValue::Boolean(self.featured)),
            "likes" => Some(FieldValue::Number(self.likes as f64)),
            "comments" => Some(FieldValue::Number(self.comments as f64)),
            "views" => Some(FieldValue::Number(self.views as f64)),
            "reading_time" => Some(FieldValue::Number(f64::from(self.reading_time))),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            "updated_at" => Some(FieldValue::Date(self.updated_at)),
            "published_at" => self.published_at.map(FieldValue::Date),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt]
    }

    fn search_tags(&self) -> &[String] {
        &self.tags
    }
}

/// Author input for a new post. The store validates it and fills in the
/// derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Left empty, an excerpt is derived from the content.
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: Uuid,
    pub category: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub featured: bool,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub featured: Option<bool>,
}
