// Admin post editor form model. Drafts are decorative in this scope:
// building one never writes back to the catalog.
use chrono::{DateTime, Utc};

use crate::blog::models::{Author, Post, PostId, Slug};
use crate::error::AppResult;

#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub cover_image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
    /// Set when editing an existing post; `None` for a new draft.
    editing: Option<PostId>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from an existing post, as the edit route does.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            body: post.body.clone(),
            cover_image_url: post.cover_image_url.clone(),
            tags: post.tags.clone(),
            featured: post.featured,
            editing: Some(post.id.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Add a tag, ignoring whitespace-only input and duplicates.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Derive a URL-safe slug from the draft title.
    pub fn slug(&self) -> AppResult<Slug> {
        let slug: String = self
            .title
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        let slug = slug
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        Slug::new(slug)
    }

    /// Materialize the draft into a post record. Editing an existing post
    /// keeps its id and creation time; a new draft gets fresh ones.
    pub fn build(&self, author: Author, original: Option<&Post>, now: DateTime<Utc>) -> AppResult<Post> {
        let slug = self.slug()?;
        Ok(Post {
            id: original
                .map(|p| p.id.clone())
                .unwrap_or_else(|| PostId::new(uuid::Uuid::now_v7().to_string())),
            title: self.title.trim().to_string(),
            slug,
            excerpt: self.excerpt.clone(),
            body: self.body.clone(),
            cover_image_url: self.cover_image_url.clone(),
            author,
            created_at: original.map(|p| p.created_at).unwrap_or(now),
            updated_at: now,
            tags: self.tags.clone(),
            like_count: original.map(|p| p.like_count).unwrap_or(0),
            view_count: original.map(|p| p.view_count).unwrap_or(0),
            featured: self.featured,
        })
    }
}
