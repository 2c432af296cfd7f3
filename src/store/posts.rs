use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::model::post::{Post, PostDraft, PostPatch, PostStatus};
use crate::query::descriptor::QueryDescriptor;
use crate::query::engine;
use crate::query::results::QueryResult;
use crate::text::{format, slug, validate};

/// In-memory post repository. New posts go to the front, so the
/// newest-first insertion order is what the query engine's permissive
/// sort fallback preserves for unordered pairs.
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    config: Config,
}

impl PostStore {
    pub fn new(config: Config) -> Self {
        PostStore {
            posts: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Validate a draft and store it as a full post: slug, excerpt,
    /// reading time, and timestamps are derived here; counters start
    /// at zero.
    pub fn create(&self, draft: PostDraft) -> Result<Post> {
        validate::post_draft(&draft, &self.config.validation)?;

        let now = Utc::now();
        let excerpt = match draft.excerpt {
            Some(text) if !text.trim().is_empty() => text,
            _ => format::excerpt(&draft.content, self.config.excerpt_length),
        };
        let post = Post {
            id: Uuid::new_v4(),
            slug: self.unique_slug(&draft.title),
            reading_time: format::reading_time(&draft.content, self.config.reading_wpm),
            title: draft.title,
            content: draft.content,
            excerpt,
            cover_image: draft.cover_image,
            author_id: draft.author_id,
            category: draft.category,
            tags: draft.tags,
            status: draft.status,
            featured: draft.featured,
            likes: 0,
            comments: 0,
            views: 0,
            created_at: now,
            updated_at: now,
            published_at: (draft.status == PostStatus::Published).then_some(now),
        };

        debug!(id = %post.id, slug = %post.slug, "post created");
        self.posts.write().insert(0, post.clone());
        Ok(post)
    }

    pub fn get(&self, id: Uuid) -> Option<Post> {
        self.posts.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.read().iter().find(|p| p.slug == slug).cloned()
    }

    /// Record one view. Kept separate from `get` so plain reads stay
    /// free of side effects; presentation decides what counts as a view.
    pub fn record_view(&self, id: Uuid) -> Result<u64> {
        let mut posts = self.posts.write();
        let post = Self::find_mut(&mut posts, id)?;
        post.views += 1;
        Ok(post.views)
    }

    pub fn like(&self, id: Uuid) -> Result<u64> {
        let mut posts = self.posts.write();
        let post = Self::find_mut(&mut posts, id)?;
        post.likes += 1;
        Ok(post.likes)
    }

    /// Apply a partial update. The slug is deliberately left alone on
    /// title changes so existing URLs keep resolving.
    pub fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post> {
        let limits = &self.config.validation;
        if let Some(title) = &patch.title {
            validate::title(title, limits)?;
        }
        if let Some(content) = &patch.content {
            validate::content(content, limits)?;
        }
        if let Some(excerpt) = &patch.excerpt {
            validate::excerpt(excerpt, limits)?;
        }
        if let Some(tags) = &patch.tags {
            validate::tags(tags, limits)?;
        }

        let mut posts = self.posts.write();
        let post = Self::find_mut(&mut posts, id)?;
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.reading_time = format::reading_time(&content, self.config.reading_wpm);
            post.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(cover_image) = patch.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(category) = patch.category {
            post.category = category;
        }
        if let Some(tags) = patch.tags {
            post.tags = tags;
        }
        if let Some(featured) = patch.featured {
            post.featured = featured;
        }
        if let Some(status) = patch.status {
            apply_status(post, status);
        }
        post.updated_at = Utc::now();
        debug!(id = %post.id, "post updated");
        Ok(post.clone())
    }

    /// Moderation: move a post through its editorial lifecycle.
    /// The first transition to `Published` stamps `published_at`.
    pub fn set_status(&self, id: Uuid, status: PostStatus) -> Result<Post> {
        let mut posts = self.posts.write();
        let post = Self::find_mut(&mut posts, id)?;
        apply_status(post, status);
        post.updated_at = Utc::now();
        debug!(id = %post.id, status = status.as_str(), "post status changed");
        Ok(post.clone())
    }

    pub fn set_featured(&self, id: Uuid, featured: bool) -> Result<Post> {
        let mut posts = self.posts.write();
        let post = Self::find_mut(&mut posts, id)?;
        post.featured = featured;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    /// Overwrite the denormalized comment counter; the platform facade
    /// calls this whenever the comment store changes.
    pub fn set_comment_count(&self, id: Uuid, count: u64) -> Result<()> {
        let mut posts = self.posts.write();
        let post = Self::find_mut(&mut posts, id)?;
        post.comments = count;
        Ok(())
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut posts = self.posts.write();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(Error::not_found(format!("post {id}")));
        }
        debug!(%id, "post deleted");
        Ok(())
    }

    /// Filtered, sorted, paginated listing.
    pub fn list(&self, descriptor: &QueryDescriptor) -> QueryResult<Post> {
        let posts = self.posts.read();
        engine::query(posts.as_slice(), descriptor)
    }

    /// Front-page picks: featured and published, newest first.
    pub fn featured(&self) -> Vec<Post> {
        self.posts
            .read()
            .iter()
            .filter(|p| p.featured && p.status == PostStatus::Published)
            .take(self.config.featured_limit)
            .cloned()
            .collect()
    }

    /// Published posts in one category, newest first.
    pub fn by_category(&self, category: &str) -> Vec<Post> {
        self.posts
            .read()
            .iter()
            .filter(|p| p.category == category && p.status == PostStatus::Published)
            .take(self.config.category_page_size)
            .cloned()
            .collect()
    }

    /// Copy of the whole collection, for aggregation.
    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }

    fn find_mut(posts: &mut [Post], id: Uuid) -> Result<&mut Post> {
        posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(format!("post {id}")))
    }

    /// Slug from the title, suffixed with a counter when taken.
    fn unique_slug(&self, title: &str) -> String {
        let mut base = slug::slugify(title);
        if base.is_empty() {
            base = "post".to_string();
        }
        let posts = self.posts.read();
        if !posts.iter().any(|p| p.slug == base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !posts.iter().any(|p| p.slug == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// The first transition to `Published` stamps `published_at`; later
/// unpublish/republish cycles keep the original date.
fn apply_status(post: &mut Post, status: PostStatus) {
    if status == PostStatus::Published && post.published_at.is_none() {
        post.published_at = Some(Utc::now());
    }
    post.status = status;
}
