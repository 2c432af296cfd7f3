use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::model::comment::Comment;
use crate::query::descriptor::QueryDescriptor;
use crate::query::engine;
use crate::query::results::QueryResult;
use crate::text::validate;

/// In-memory comment repository. Top-level comments live in the vec;
/// replies nest inside their parent.
pub struct CommentStore {
    comments: RwLock<Vec<Comment>>,
    config: Config,
}

impl CommentStore {
    pub fn new(config: Config) -> Self {
        CommentStore {
            comments: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Top-level comments for a post, newest first.
    pub fn for_post(&self, post_id: Uuid) -> Vec<Comment> {
        let mut out: Vec<Comment> = self
            .comments
            .read()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    /// Find a comment anywhere in the tree.
    pub fn get(&self, id: Uuid) -> Option<Comment> {
        find(&self.comments.read(), id).cloned()
    }

    pub fn add(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        author_name: &str,
        content: &str,
    ) -> Result<Comment> {
        validate::comment(content, &self.config.validation)?;
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            author_name: author_name.to_string(),
            content: content.trim().to_string(),
            likes: 0,
            replies: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        debug!(id = %comment.id, post = %post_id, "comment added");
        self.comments.write().push(comment.clone());
        Ok(comment)
    }

    /// Attach a reply to an existing comment, at any nesting depth.
    pub fn add_reply(
        &self,
        parent_id: Uuid,
        author_id: Uuid,
        author_name: &str,
        content: &str,
    ) -> Result<Comment> {
        validate::comment(content, &self.config.validation)?;
        let mut comments = self.comments.write();
        let parent = find_mut(&mut comments, parent_id)
            .ok_or_else(|| Error::not_found(format!("comment {parent_id}")))?;
        let now = Utc::now();
        let reply = Comment {
            id: Uuid::new_v4(),
            post_id: parent.post_id,
            author_id,
            author_name: author_name.to_string(),
            content: content.trim().to_string(),
            likes: 0,
            replies: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        parent.replies.push(reply.clone());
        debug!(id = %reply.id, parent = %parent_id, "reply added");
        Ok(reply)
    }

    pub fn like(&self, id: Uuid) -> Result<u64> {
        let mut comments = self.comments.write();
        let comment =
            find_mut(&mut comments, id).ok_or_else(|| Error::not_found(format!("comment {id}")))?;
        comment.likes += 1;
        Ok(comment.likes)
    }

    /// Remove a comment (and its whole reply subtree) wherever it sits.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut comments = self.comments.write();
        if remove_in(&mut comments, id) {
            debug!(%id, "comment deleted");
            Ok(())
        } else {
            Err(Error::not_found(format!("comment {id}")))
        }
    }

    /// Every comment on a post, replies included.
    pub fn count_for_post(&self, post_id: Uuid) -> usize {
        self.comments
            .read()
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(Comment::thread_len)
            .sum()
    }

    /// Drop all of a post's comments; returns how many top-level
    /// threads went with it.
    pub fn purge_post(&self, post_id: Uuid) -> usize {
        let mut comments = self.comments.write();
        let before = comments.len();
        comments.retain(|c| c.post_id != post_id);
        before - comments.len()
    }

    /// Moderation listing over top-level comments.
    pub fn list(&self, descriptor: &QueryDescriptor) -> QueryResult<Comment> {
        let comments = self.comments.read();
        engine::query(comments.as_slice(), descriptor)
    }

    pub fn len(&self) -> usize {
        self.comments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.read().is_empty()
    }
}

fn find(comments: &[Comment], id: Uuid) -> Option<&Comment> {
    for comment in comments {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find(&comment.replies, id) {
            return Some(found);
        }
    }
    None
}

fn find_mut(comments: &mut [Comment], id: Uuid) -> Option<&mut Comment> {
    for comment in comments.iter_mut() {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find_mut(&mut comment.replies, id) {
            return Some(found);
        }
    }
    None
}

fn remove_in(comments: &mut Vec<Comment>, id: Uuid) -> bool {
    let before = comments.len();
    comments.retain(|c| c.id != id);
    if comments.len() < before {
        return true;
    }
    comments.iter_mut().any(|c| remove_in(&mut c.replies, id))
}
