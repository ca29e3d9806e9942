//! Catalog loader - resolves posts from the primary source with fallback
//!
//! The only place I/O meets the pure catalog core. A provider failure is
//! logged and degrades to the bundled table; it never propagates to the
//! caller. The one fatal condition is a loader with nothing to load from.

use std::time::Duration;

use super::fallback;
use super::provider::PostSource;
use super::rest::RestSource;
use crate::catalog::{
    merge_with_fallback, normalize, normalize_comments, CatalogError, Comment, Post, RawComment,
    RawPost,
};
use crate::Blogcat;

/// Loads and normalizes the post catalog
pub struct CatalogLoader {
    source: Option<Box<dyn PostSource>>,
    fallback_posts: Option<Vec<RawPost>>,
    fallback_comments: Vec<RawComment>,
    placeholder_image: String,
}

impl CatalogLoader {
    /// Create a loader from the app handle, with the bundled fallback table
    pub fn new(app: &Blogcat) -> Self {
        let source: Option<Box<dyn PostSource>> = match (&app.config.api_url, app.offline) {
            (Some(url), false) => {
                let timeout = Duration::from_secs(app.config.request_timeout_secs);
                match RestSource::new(url, timeout) {
                    Ok(rest) => Some(Box::new(rest)),
                    Err(e) => {
                        tracing::warn!("Failed to build REST source for {}: {}", url, e);
                        None
                    }
                }
            }
            _ => None,
        };

        Self {
            source,
            fallback_posts: Some(fallback::posts()),
            fallback_comments: fallback::all_comments(),
            placeholder_image: app.config.placeholder_image.clone(),
        }
    }

    /// Loader over explicit parts; no bundled data is attached
    pub fn with_parts(
        source: Option<Box<dyn PostSource>>,
        fallback_posts: Option<Vec<RawPost>>,
        placeholder_image: &str,
    ) -> Self {
        Self {
            source,
            fallback_posts,
            fallback_comments: Vec::new(),
            placeholder_image: placeholder_image.to_string(),
        }
    }

    /// Resolve the full normalized catalog
    pub async fn load_catalog(&self) -> Result<Vec<Post>, CatalogError> {
        let primary = self.fetch_primary().await;
        merge_with_fallback(primary, self.fallback_posts.clone(), &self.placeholder_image)
    }

    /// Resolve a single post by id
    ///
    /// A remote miss or failure degrades to a fallback-table lookup;
    /// `Ok(None)` means the id exists nowhere.
    pub async fn load_post(&self, id: &str) -> Result<Option<Post>, CatalogError> {
        if self.source.is_none() && self.fallback_posts.is_none() {
            return Err(CatalogError::Unavailable);
        }

        if let Some(source) = &self.source {
            match source.fetch_post(id).await {
                Ok(Some(raw)) => {
                    return Ok(normalize(&[raw], &self.placeholder_image).pop());
                }
                Ok(None) => {
                    tracing::debug!("Post {} not found at {}", id, source.name());
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch post {} from {}: {}", id, source.name(), e);
                }
            }
        }

        let found = self
            .fallback_posts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|p| p.id == id);

        Ok(found.and_then(|raw| {
            normalize(std::slice::from_ref(raw), &self.placeholder_image).pop()
        }))
    }

    /// Resolve the comment thread for a post
    ///
    /// Comments have no fatal condition: an unreachable source degrades to
    /// the bundled thread, and no thread at all is an empty list.
    pub async fn load_comments(&self, post_id: &str) -> Vec<Comment> {
        if let Some(source) = &self.source {
            match source.fetch_comments(post_id).await {
                Ok(raw) => return normalize_comments(&raw),
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch comments for {} from {}: {}",
                        post_id,
                        source.name(),
                        e
                    );
                }
            }
        }

        let raw: Vec<RawComment> = self
            .fallback_comments
            .iter()
            .filter(|c| c.post_id.as_deref() == Some(post_id))
            .cloned()
            .collect();
        normalize_comments(&raw)
    }

    async fn fetch_primary(&self) -> Option<Vec<RawPost>> {
        let source = self.source.as_ref()?;
        match source.fetch_posts().await {
            Ok(posts) => Some(posts),
            Err(e) => {
                tracing::warn!("Failed to fetch posts from {}: {}", source.name(), e);
                None
            }
        }
    }
}
