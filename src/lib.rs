//! folio: a small static site generator for a blog and project portfolio
//!
//! Posts and projects are read from `content/`, gathered into an immutable
//! [`site::SiteModel`] and rendered with embedded Tera templates into HTML
//! pages, an RSS feed, a sitemap and a JSON search index.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod site;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

/// Name of the optional site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory (posts/ and projects/)
    pub content_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,
}

impl Folio {
    /// Open a site, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let output_dir = base_dir.join(&config.output_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            output_dir,
            static_dir,
        }
    }

    /// Build the static site
    pub fn build(&self) -> std::result::Result<commands::BuildSummary, commands::BuildError> {
        commands::build::run(self)
    }

    /// Remove the output directory
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post dated today
    pub fn new_post(&self, title: &str) -> anyhow::Result<()> {
        commands::new::run(self, title)
    }
}
