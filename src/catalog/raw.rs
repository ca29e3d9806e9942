//! Raw wire records, before normalization
//!
//! Post sources do not agree on a schema: the REST backend sends the author
//! under `author_name`, the bundled fallback table uses `author`, and every
//! field except `id` may be missing entirely. These types accept all of
//! those shapes as-is; `catalog::normalize` resolves the differences.

use serde::{Deserialize, Serialize};

/// A post record as received from a source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPost {
    /// Post id, unique within a source
    pub id: String,

    pub title: Option<String>,

    /// Author field as the fallback table spells it
    pub author: Option<String>,

    /// Author field as the REST backend spells it
    pub author_name: Option<String>,

    /// Free-form date text, kept opaque (may be unparsable)
    pub date: Option<String>,

    pub image: Option<String>,

    pub excerpt: Option<String>,

    pub content: Option<String>,

    pub featured: Option<bool>,

    pub category: Option<String>,

    pub published: Option<bool>,
}

impl RawPost {
    /// Minimal record with just an id, all other fields absent
    pub fn with_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

/// A comment record as received from a source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawComment {
    pub id: String,

    #[serde(rename = "postId")]
    pub post_id: Option<String>,

    pub author: Option<String>,

    pub content: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,

    pub replies: Option<Vec<RawReply>>,
}

/// A reply nested under a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawReply {
    pub id: String,

    pub author: Option<String>,

    pub content: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rest_shape() {
        let json = r#"{
            "id": "cloud-migration",
            "title": "5 Lessons Learned",
            "author_name": "Sarah Chen",
            "date": "2/15/24",
            "image": "/assets/images/pics.png",
            "excerpt": "Key insights.",
            "featured": false,
            "category": "Cloud"
        }"#;

        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "cloud-migration");
        assert_eq!(post.author_name.as_deref(), Some("Sarah Chen"));
        assert_eq!(post.author, None);
        assert_eq!(post.content, None);
    }

    #[test]
    fn test_parse_fallback_shape() {
        let json = r#"{"id": "x", "author": "Jenny Wilson"}"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.author.as_deref(), Some("Jenny Wilson"));
        assert_eq!(post.author_name, None);
        assert_eq!(post.date, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"id": "x", "likes": 40, "tags": ["a"]}"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "x");
    }

    #[test]
    fn test_parse_comment_wire_names() {
        let json = r#"{
            "id": "comment-1",
            "postId": "cloud-migration",
            "author": "Alex",
            "content": "Great write-up",
            "createdAt": "2024-03-08T10:00:00Z",
            "replies": [
                {"id": "reply-1", "author": "Sam", "content": "+1", "createdAt": "2024-03-09T09:00:00Z"}
            ]
        }"#;

        let comment: RawComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id.as_deref(), Some("cloud-migration"));
        assert_eq!(comment.replies.as_ref().unwrap().len(), 1);
        assert_eq!(
            comment.replies.unwrap()[0].created_at.as_deref(),
            Some("2024-03-09T09:00:00Z")
        );
    }
}
