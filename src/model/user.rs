use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Visitor,
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A platform account. Credential material is out of scope; this is the
/// profile the rest of the platform sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub joined_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        User {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            role,
            avatar: None,
            bio: None,
            website: None,
            is_active: true,
            is_verified: false,
            joined_at: Utc::now(),
            last_login: None,
        }
    }
}

impl Record for User {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "username" => Some(FieldValue::Text(self.username.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "role" => Some(FieldValue::text(self.role.as_str())),
            "is_active" => Some(FieldValue::Boolean(self.is_active)),
            "is_verified" => Some(FieldValue::Boolean(self.is_verified)),
            "joined_at" => Some(FieldValue::Date(self.joined_at)),
            "last_login" => self.last_login.map(FieldValue::Date),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.username, &self.email]
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub is_verified: Option<bool>,
}
