//! Normalization and fallback merging
//!
//! All schema differences between sources are resolved here, in one pass,
//! so the query operations never check for missing fields. The fallback
//! policy is all-or-nothing: a non-empty primary source is used alone, and
//! the fallback table is used alone otherwise. A single listing therefore
//! never mixes remote and bundled records, and a remote record can never be
//! shadowed by a fallback record with the same id.

use thiserror::Error;

use super::post::{Comment, Post, Reply};
use super::raw::{RawComment, RawPost};

/// Catalog-level failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Neither the primary source nor the fallback table was available.
    /// Distinct from an empty catalog, which is a normal result.
    #[error("no post data available from any source")]
    Unavailable,
}

/// Normalize raw records into canonical posts
///
/// Pure, order-preserving, and 1:1: output length equals input length and
/// every output id equals the corresponding input id.
pub fn normalize(raw: &[RawPost], placeholder_image: &str) -> Vec<Post> {
    raw.iter()
        .map(|r| normalize_post(r, placeholder_image))
        .collect()
}

fn normalize_post(raw: &RawPost, placeholder_image: &str) -> Post {
    // Author precedence: `author_name` when present and non-empty, then
    // `author`, then empty string.
    let author_name = match raw.author_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => raw.author.clone().unwrap_or_default(),
    };

    let image = match raw.image.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => placeholder_image.to_string(),
    };

    Post {
        id: raw.id.clone(),
        title: raw.title.clone().unwrap_or_default(),
        author_name,
        date: raw.date.clone(),
        image,
        excerpt: raw.excerpt.clone().unwrap_or_default(),
        content: raw.content.clone().unwrap_or_default(),
        featured: raw.featured.unwrap_or(false),
        category: raw.category.clone(),
        published: raw.published.unwrap_or(false),
    }
}

/// Resolve the catalog from a primary source with a static fallback
///
/// The fallback engages only when the primary is absent or empty. Both
/// sources absent is the one fatal condition in this module.
pub fn merge_with_fallback(
    primary: Option<Vec<RawPost>>,
    fallback: Option<Vec<RawPost>>,
    placeholder_image: &str,
) -> Result<Vec<Post>, CatalogError> {
    if primary.is_none() && fallback.is_none() {
        return Err(CatalogError::Unavailable);
    }

    if let Some(posts) = primary {
        if !posts.is_empty() {
            return Ok(normalize(&posts, placeholder_image));
        }
    }

    Ok(normalize(&fallback.unwrap_or_default(), placeholder_image))
}

/// Normalize raw comments, replies included
pub fn normalize_comments(raw: &[RawComment]) -> Vec<Comment> {
    raw.iter()
        .map(|c| Comment {
            id: c.id.clone(),
            post_id: c.post_id.clone().unwrap_or_default(),
            author: c.author.clone().unwrap_or_default(),
            content: c.content.clone().unwrap_or_default(),
            created_at: c.created_at.clone(),
            replies: c
                .replies
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|r| Reply {
                    id: r.id.clone(),
                    author: r.author.clone().unwrap_or_default(),
                    content: r.content.clone().unwrap_or_default(),
                    created_at: r.created_at.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::raw::RawReply;

    const PLACEHOLDER: &str = "/assets/images/featured-img.png";

    #[test]
    fn test_normalize_preserves_length_and_ids() {
        let raw = vec![
            RawPost::with_id("a"),
            RawPost::with_id("b"),
            RawPost::with_id("c"),
        ];
        let posts = normalize(&raw, PLACEHOLDER);
        assert_eq!(posts.len(), 3);
        for (r, p) in raw.iter().zip(&posts) {
            assert_eq!(r.id, p.id);
        }
    }

    #[test]
    fn test_normalize_defaults() {
        let posts = normalize(&[RawPost::with_id("x")], PLACEHOLDER);
        let post = &posts[0];
        assert_eq!(post.title, "");
        assert_eq!(post.author_name, "");
        assert_eq!(post.date, None);
        assert_eq!(post.image, PLACEHOLDER);
        assert_eq!(post.excerpt, "");
        assert_eq!(post.content, "");
        assert!(!post.featured);
        assert_eq!(post.category, None);
        assert!(!post.published);
    }

    #[test]
    fn test_author_precedence() {
        let raw = RawPost {
            author: Some("Jenny Wilson".to_string()),
            author_name: Some("J. Wilson".to_string()),
            ..RawPost::with_id("a")
        };
        assert_eq!(normalize(&[raw], PLACEHOLDER)[0].author_name, "J. Wilson");

        // Empty author_name falls through to author
        let raw = RawPost {
            author: Some("Jenny Wilson".to_string()),
            author_name: Some(String::new()),
            ..RawPost::with_id("a")
        };
        assert_eq!(
            normalize(&[raw], PLACEHOLDER)[0].author_name,
            "Jenny Wilson"
        );
    }

    #[test]
    fn test_empty_image_gets_placeholder() {
        let raw = RawPost {
            image: Some(String::new()),
            ..RawPost::with_id("a")
        };
        assert_eq!(normalize(&[raw], PLACEHOLDER)[0].image, PLACEHOLDER);
    }

    #[test]
    fn test_unparsable_date_is_retained_verbatim() {
        let raw = RawPost {
            date: Some("someday".to_string()),
            ..RawPost::with_id("a")
        };
        assert_eq!(
            normalize(&[raw], PLACEHOLDER)[0].date.as_deref(),
            Some("someday")
        );
    }

    #[test]
    fn test_merge_uses_primary_when_present() {
        let primary = vec![RawPost::with_id("remote")];
        let fallback = vec![RawPost::with_id("remote"), RawPost::with_id("mock")];

        let posts = merge_with_fallback(Some(primary), Some(fallback), PLACEHOLDER).unwrap();
        // Fallback is never blended in, even on overlapping ids
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "remote");
    }

    #[test]
    fn test_merge_empty_primary_engages_fallback() {
        let fallback = vec![RawPost::with_id("y")];
        let posts = merge_with_fallback(Some(Vec::new()), Some(fallback), PLACEHOLDER).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "y");
    }

    #[test]
    fn test_merge_missing_primary_engages_fallback() {
        let fallback = vec![RawPost::with_id("x")];
        let posts = merge_with_fallback(None, Some(fallback), PLACEHOLDER).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author_name, "");
        assert_eq!(posts[0].image, PLACEHOLDER);
        assert_eq!(posts[0].category, None);
    }

    #[test]
    fn test_merge_both_missing_is_an_error() {
        let result = merge_with_fallback(None, None, PLACEHOLDER);
        assert_eq!(result.unwrap_err(), CatalogError::Unavailable);
    }

    #[test]
    fn test_normalize_comments_defaults() {
        let raw = vec![RawComment {
            id: "c1".to_string(),
            replies: Some(vec![RawReply {
                id: "r1".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        }];

        let comments = normalize_comments(&raw);
        assert_eq!(comments[0].post_id, "");
        assert_eq!(comments[0].author, "");
        assert_eq!(comments[0].replies.len(), 1);
        assert_eq!(comments[0].replies[0].content, "");

        let raw = vec![RawComment {
            id: "c2".to_string(),
            replies: None,
            ..Default::default()
        }];
        assert!(normalize_comments(&raw)[0].replies.is_empty());
    }
}
