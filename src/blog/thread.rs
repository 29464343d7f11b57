// Session-local comment composition. The thread is a working copy for
// the page being viewed: new comments and replies land here and are
// gone when the page is; the catalog itself never changes.
use chrono::{DateTime, Utc};

use crate::blog::catalog::PostCatalog;
use crate::blog::models::{Author, Comment, CommentId, PostId};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct CommentThread {
    post_id: PostId,
    comments: Vec<Comment>,
}

impl CommentThread {
    /// Clone the post's comments out of the catalog into a working copy.
    pub fn for_post(catalog: &PostCatalog, post_id: &PostId) -> Self {
        let comments = catalog
            .comments_for(post_id)
            .into_iter()
            .cloned()
            .collect();
        Self {
            post_id: post_id.clone(),
            comments,
        }
    }

    pub fn empty(post_id: PostId) -> Self {
        Self {
            post_id,
            comments: Vec::new(),
        }
    }

    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// Top-level comments in insertion order, replies nested.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Top-level comments plus nested replies.
    pub fn total_count(&self) -> usize {
        self.comments.iter().map(Comment::total_count).sum()
    }

    /// Append a new top-level comment and return a reference to it.
    pub fn add_comment(
        &mut self,
        author: Author,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> &Comment {
        let comment = Comment {
            id: CommentId::generate(),
            post_id: self.post_id.clone(),
            parent_id: None,
            author,
            content: content.into(),
            created_at: now,
            like_count: 0,
            replies: Vec::new(),
        };
        self.comments.push(comment);
        self.comments.last().expect("just pushed")
    }

    /// Append a reply under `parent_id`. Fails with `InvalidParent` when
    /// the id resolves to nothing, or to a comment that is itself a
    /// reply: the thread nests exactly one level. Failure leaves the
    /// thread untouched.
    pub fn add_reply(
        &mut self,
        parent_id: &CommentId,
        author: Author,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> AppResult<&Comment> {
        // Replying to a reply would nest a second level; reject it the
        // same way as a dangling id.
        let parent = self
            .comments
            .iter_mut()
            .find(|c| &c.id == parent_id)
            .ok_or_else(|| AppError::InvalidParent(parent_id.to_string()))?;

        let reply = Comment {
            id: CommentId::generate(),
            post_id: self.post_id.clone(),
            parent_id: Some(parent_id.clone()),
            author,
            content: content.into(),
            created_at: now,
            like_count: 0,
            replies: Vec::new(),
        };
        parent.replies.push(reply);
        Ok(parent.replies.last().expect("just pushed"))
    }

    /// Bump a comment's (or reply's) like count. Returns the new count.
    pub fn like(&mut self, comment_id: &CommentId) -> AppResult<u32> {
        for comment in &mut self.comments {
            if &comment.id == comment_id {
                comment.like_count += 1;
                return Ok(comment.like_count);
            }
            for reply in &mut comment.replies {
                if &reply.id == comment_id {
                    reply.like_count += 1;
                    return Ok(reply.like_count);
                }
            }
        }
        Err(AppError::CommentNotFound(comment_id.to_string()))
    }
}
