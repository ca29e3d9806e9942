//! REST-backed post source

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::provider::PostSource;
use crate::catalog::{RawComment, RawPost};

/// Post source backed by the posts REST backend
///
/// Endpoints: `GET /posts`, `GET /posts/{id}`, `GET /comments/post/{id}`,
/// and `GET /` as a health probe.
pub struct RestSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestSource {
    /// Create a source against a base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Probe the backend root endpoint
    ///
    /// Never fails: an unreachable backend reports as `offline`.
    pub async fn status(&self) -> serde_json::Value {
        let url = format!("{}/", self.base_url);
        let payload = async {
            let response = self.client.get(&url).send().await?;
            response
                .error_for_status()?
                .json::<serde_json::Value>()
                .await
        }
        .await;

        match payload {
            Ok(value) => value,
            Err(e) => serde_json::json!({
                "status": "offline",
                "error": e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PostSource for RestSource {
    async fn fetch_posts(&self) -> Result<Vec<RawPost>> {
        let url = format!("{}/posts", self.base_url);
        tracing::debug!("Fetching posts from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let posts = response.json::<Vec<RawPost>>().await?;
        Ok(posts)
    }

    async fn fetch_post(&self, id: &str) -> Result<Option<RawPost>> {
        let url = format!("{}/posts/{}", self.base_url, id);
        tracing::debug!("Fetching post from {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let post = response.error_for_status()?.json::<RawPost>().await?;
        Ok(Some(post))
    }

    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<RawComment>> {
        let url = format!("{}/comments/post/{}", self.base_url, post_id);
        tracing::debug!("Fetching comments from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let comments = response.json::<Vec<RawComment>>().await?;
        Ok(comments)
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = RestSource::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(source.base_url, "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_status_reports_offline_when_unreachable() {
        // Reserved TEST-NET address, nothing listens there
        let source =
            RestSource::new("http://192.0.2.1:9", Duration::from_millis(200)).unwrap();
        let status = source.status().await;
        assert_eq!(status["status"], "offline");
    }
}
