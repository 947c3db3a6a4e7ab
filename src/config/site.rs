//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

/// Number of posts shown on the home page
pub const RECENT_POSTS: usize = 4;

/// Number of featured projects shown on the home page
pub const FEATURED_PROJECTS: usize = 3;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    /// Absolute base URL used by the feed and sitemap
    pub url: String,

    // Directory
    pub content_dir: String,
    pub output_dir: String,
    pub static_dir: String,

    /// Home page bounds, fixed policy rather than site data
    #[serde(skip)]
    pub limits: Limits,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            content_dir: "content".to_string(),
            output_dir: "docs".to_string(),
            static_dir: "static".to_string(),

            limits: Limits::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Self::read(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Upper bounds for the derived home page views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub recent_posts: usize,
    pub featured_projects: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recent_posts: RECENT_POSTS,
            featured_projects: FEATURED_PROJECTS,
        }
    }
}
