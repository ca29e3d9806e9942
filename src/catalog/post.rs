//! Post and Comment models
//!
//! Canonical shapes produced by `catalog::normalize`. Every field is
//! defaulted there, so consumers never check for absence.

use serde::{Deserialize, Serialize};

/// A normalized blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post id, unique within the catalog
    pub id: String,

    /// Post title (empty string when the source omitted it)
    pub title: String,

    /// Display author name
    pub author_name: String,

    /// Publication date as opaque text, verbatim from the source
    pub date: Option<String>,

    /// Card/hero image path (placeholder token when absent)
    pub image: String,

    /// Short teaser text
    pub excerpt: String,

    /// Full body (empty for listing-only records)
    pub content: String,

    /// Whether this post is the featured one
    pub featured: bool,

    /// Category name, if the post has one
    pub category: Option<String>,

    /// Whether the post is published
    pub published: bool,
}

impl Post {
    /// Whether this post belongs to the non-featured partition
    pub fn is_regular(&self) -> bool {
        !self.featured
    }
}

/// A normalized comment with its replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    /// Id of the post this comment belongs to
    pub post_id: String,

    pub author: String,

    pub content: String,

    /// Creation time as opaque text, verbatim from the source
    pub created_at: Option<String>,

    pub replies: Vec<Reply>,
}

/// A normalized reply nested under a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,

    pub author: String,

    pub content: String,

    pub created_at: Option<String>,
}
