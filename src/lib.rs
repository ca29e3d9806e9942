//! blogcat: blog catalog resolution with static fallback
//!
//! This crate resolves a blog post catalog from a REST backend, degrading
//! to a bundled static table when the backend is absent or unreachable,
//! and answers the queries a blog front end needs: post by id, the
//! featured post, related posts by category, recent posts by date, and a
//! read-more overflow list.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod helpers;
pub mod source;

use anyhow::Result;
use std::path::Path;

/// The main application handle
#[derive(Clone)]
pub struct Blogcat {
    /// Application configuration
    pub config: config::AppConfig,
    /// Skip the remote source and serve fallback data only
    pub offline: bool,
}

impl Blogcat {
    /// Create an instance from a directory, reading `blogcat.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("blogcat.yml");

        let config = if config_path.exists() {
            config::AppConfig::load(&config_path)?
        } else {
            config::AppConfig::default()
        };

        Ok(Self {
            config,
            offline: false,
        })
    }

    /// A catalog loader over this instance's configuration
    pub fn loader(&self) -> source::CatalogLoader {
        source::CatalogLoader::new(self)
    }
}
