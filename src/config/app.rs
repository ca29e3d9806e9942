//! Application configuration (blogcat.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the posts backend; absent means fallback data only
    pub api_url: Option<String>,

    /// Image token substituted for posts without one
    pub placeholder_image: String,

    /// How many posts the recent section shows
    pub recent_limit: usize,

    /// How many related posts a single-post view shows
    pub related_limit: usize,

    /// How many posts the read-more section shows
    pub read_more_limit: usize,

    /// Per-request timeout for the REST source, in seconds
    pub request_timeout_secs: u64,

    /// chrono format string for displaying parsed dates
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            placeholder_image: "/assets/images/featured-img.png".to_string(),
            recent_limit: 5,
            related_limit: 3,
            read_more_limit: 6,
            request_timeout_secs: 10,
            date_format: "%b %e, %Y".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
