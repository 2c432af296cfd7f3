use parking_lot::RwLock;
use tracing::debug;

use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::model::category::{Category, CategoryPatch};
use crate::model::post::{Post, PostStatus};
use crate::query::descriptor::QueryDescriptor;
use crate::query::engine;
use crate::query::results::QueryResult;
use crate::text::{slug, validate};

/// In-memory category repository. Ids are slugs derived from the name.
pub struct CategoryStore {
    categories: RwLock<Vec<Category>>,
    config: Config,
}

impl CategoryStore {
    pub fn new(config: Config) -> Self {
        CategoryStore {
            categories: RwLock::new(Vec::new()),
            config,
        }
    }

    pub fn add(&self, name: &str, description: &str) -> Result<Category> {
        validate::category_name(name, &self.config.validation)?;
        let id = slug::slugify(name);
        if id.is_empty() {
            return Err(Error::invalid_input(format!(
                "category name has no sluggable characters: {name:?}"
            )));
        }

        let mut categories = self.categories.write();
        if categories.iter().any(|c| c.id == id) {
            return Err(Error::new(
                ErrorKind::InvalidState,
                format!("category already exists: {id}"),
            ));
        }
        let category = Category {
            id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            post_count: 0,
            is_active: true,
        };
        debug!(id = %category.id, "category added");
        categories.push(category.clone());
        Ok(category)
    }

    pub fn get(&self, id: &str) -> Option<Category> {
        self.categories.read().iter().find(|c| c.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    pub fn active(&self) -> Vec<Category> {
        self.categories
            .read()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect()
    }

    /// Admin listing, e.g. sorted by post count.
    pub fn list(&self, descriptor: &QueryDescriptor) -> QueryResult<Category> {
        let categories = self.categories.read();
        engine::query(categories.as_slice(), descriptor)
    }

    /// Renames keep the id: the slug is an external URL surface.
    pub fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category> {
        if let Some(name) = &patch.name {
            validate::category_name(name, &self.config.validation)?;
        }
        let mut categories = self.categories.write();
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::not_found(format!("category {id}")))?;
        if let Some(name) = patch.name {
            category.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            category.description = description.trim().to_string();
        }
        if let Some(is_active) = patch.is_active {
            category.is_active = is_active;
        }
        Ok(category.clone())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut categories = self.categories.write();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(Error::not_found(format!("category {id}")));
        }
        debug!(%id, "category deleted");
        Ok(())
    }

    /// Refresh `post_count` from a post snapshot: published posts only.
    pub fn recount(&self, posts: &[Post]) {
        let mut categories = self.categories.write();
        for category in categories.iter_mut() {
            category.post_count = posts
                .iter()
                .filter(|p| p.category == category.id && p.status == PostStatus::Published)
                .count();
        }
    }

    pub fn len(&self) -> usize {
        self.categories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.read().is_empty()
    }
}
