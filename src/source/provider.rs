//! Post source abstraction
//!
//! A source yields raw records or fails; deciding what a failure means
//! (engage the fallback table, show an error state) belongs to the loader
//! and the caller, never to the source itself.

use anyhow::Result;
use async_trait::async_trait;

use crate::catalog::{RawComment, RawPost};

/// Something that can produce raw post and comment records
#[async_trait]
pub trait PostSource: Send + Sync {
    /// All posts this source knows about
    async fn fetch_posts(&self) -> Result<Vec<RawPost>>;

    /// A single post by id; `Ok(None)` is a miss, not a failure
    async fn fetch_post(&self, id: &str) -> Result<Option<RawPost>>;

    /// Comments for a post
    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<RawComment>>;

    /// Short name for log lines
    fn name(&self) -> &'static str;
}
