use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::stats::{PlatformStats, growth_percent, monthly_counts};
use crate::model::comment::Comment;
use crate::model::post::{Post, PostDraft, PostStatus};
use crate::query::descriptor::{QueryDescriptor, SortOrder};
use crate::query::engine;
use crate::store::categories::CategoryStore;
use crate::store::comments::CommentStore;
use crate::store::posts::PostStore;
use crate::store::users::UserStore;

/// Wires the stores together and owns the invariants that span them:
/// comment counters on posts, per-category post counts, and the
/// dashboard aggregation.
///
/// Store methods stay available directly (`platform.posts.list(...)`);
/// go through the facade for anything that touches more than one store.
pub struct Platform {
    pub posts: PostStore,
    pub comments: CommentStore,
    pub users: UserStore,
    pub categories: CategoryStore,
    config: Config,
}

impl Platform {
    pub fn new(config: Config) -> Self {
        Platform {
            posts: PostStore::new(config.clone()),
            comments: CommentStore::new(config.clone()),
            users: UserStore::new(config.clone()),
            categories: CategoryStore::new(config.clone()),
            config,
        }
    }

    pub fn create_post(&self, draft: PostDraft) -> Result<Post> {
        let post = self.posts.create(draft)?;
        self.refresh_category_counts();
        Ok(post)
    }

    /// Delete a post together with its comments.
    pub fn remove_post(&self, id: Uuid) -> Result<()> {
        self.posts.delete(id)?;
        let purged = self.comments.purge_post(id);
        debug!(%id, purged, "post removed with its comments");
        self.refresh_category_counts();
        Ok(())
    }

    /// Moderation: approve, reject, or unpublish a post.
    pub fn moderate(&self, id: Uuid, status: PostStatus) -> Result<Post> {
        let post = self.posts.set_status(id, status)?;
        self.refresh_category_counts();
        Ok(post)
    }

    /// Add a top-level comment and keep the post's counter in step.
    pub fn publish_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        author_name: &str,
        content: &str,
    ) -> Result<Comment> {
        if self.posts.get(post_id).is_none() {
            return Err(Error::not_found(format!("post {post_id}")));
        }
        let comment = self.comments.add(post_id, author_id, author_name, content)?;
        self.sync_comment_count(post_id)?;
        Ok(comment)
    }

    /// Reply to an existing comment; the counter follows the thread's post.
    pub fn reply_to_comment(
        &self,
        parent_id: Uuid,
        author_id: Uuid,
        author_name: &str,
        content: &str,
    ) -> Result<Comment> {
        let reply = self
            .comments
            .add_reply(parent_id, author_id, author_name, content)?;
        self.sync_comment_count(reply.post_id)?;
        Ok(reply)
    }

    pub fn remove_comment(&self, id: Uuid) -> Result<()> {
        let comment = self
            .comments
            .get(id)
            .ok_or_else(|| Error::not_found(format!("comment {id}")))?;
        self.comments.delete(id)?;
        self.sync_comment_count(comment.post_id)?;
        Ok(())
    }

    /// Aggregate dashboard statistics from current store snapshots.
    pub fn dashboard(&self) -> PlatformStats {
        let posts = self.posts.snapshot();
        let users = self.users.snapshot();
        let now = Utc::now();

        let active_authors: HashSet<Uuid> = posts.iter().map(|p| p.author_id).collect();
        let pending_posts = posts
            .iter()
            .filter(|p| p.status == PostStatus::Pending)
            .count();

        let post_dates: Vec<_> = posts.iter().map(|p| p.created_at).collect();
        let posts_per_month = monthly_counts(&post_dates, now, self.config.trailing_months);
        let user_dates: Vec<_> = users.iter().map(|u| u.joined_at).collect();
        let user_registrations = monthly_counts(&user_dates, now, self.config.trailing_months);

        let top = QueryDescriptor::new()
            .with_sort("views", SortOrder::Desc)
            .with_page(1, self.config.top_posts_limit);
        let top_posts = engine::query(&posts, &top).data;

        PlatformStats {
            total_users: users.len(),
            total_posts: posts.len(),
            active_authors: active_authors.len(),
            pending_posts,
            monthly_growth: growth_percent(&posts_per_month),
            posts_per_month,
            user_registrations,
            top_posts,
        }
    }

    fn sync_comment_count(&self, post_id: Uuid) -> Result<()> {
        let count = self.comments.count_for_post(post_id) as u64;
        self.posts.set_comment_count(post_id, count)
    }

    fn refresh_category_counts(&self) {
        self.categories.recount(&self.posts.snapshot());
    }
}
