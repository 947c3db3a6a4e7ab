//! Generator module - writes every output artifact from the site model
//!
//! Every write replaces the whole file at its path, so rendering the same
//! model twice gives the same bytes. Only the sitemap depends on the build
//! date.

mod assets;
mod feed;
mod sitemap;

use std::fs;
use std::path::{Path, PathBuf};

use tera::Context;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::helpers::post_path;
use crate::site::{PostPage, SiteModel};
use crate::templates::{self, NavPost, SiteData, TemplateEngine, TemplateRenderer};

pub use assets::copy_static_assets;

/// Static site generator using Tera templates
pub struct Generator<E = TemplateRenderer> {
    config: SiteConfig,
    output_dir: PathBuf,
    renderer: E,
}

impl Generator<TemplateRenderer> {
    /// Create a new generator with the built-in theme
    pub fn new(config: &SiteConfig, output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_engine(config, output_dir, TemplateRenderer::new()?))
    }
}

impl<E: TemplateEngine> Generator<E> {
    /// Create a generator with a custom template engine
    pub fn with_engine(config: &SiteConfig, output_dir: impl Into<PathBuf>, renderer: E) -> Self {
        Self {
            config: config.clone(),
            output_dir: output_dir.into(),
            renderer,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Ensure the output root exists
    pub fn prepare_output(&self) -> Result<()> {
        create_dir_all(&self.output_dir)
    }

    /// Write the theme's bundled stylesheet and scripts
    pub fn write_theme_assets(&self) -> Result<usize> {
        for (rel_path, bytes) in templates::THEME_ASSETS {
            self.write_artifact(rel_path, bytes)?;
        }
        Ok(templates::THEME_ASSETS.len())
    }

    /// Render the home page with recent posts and featured projects
    pub fn render_home(&self, site: &SiteModel) -> Result<PathBuf> {
        let mut context = self.create_base_context();
        context.insert("recent_posts", site.recent_posts());
        context.insert("featured_projects", &site.featured_projects());
        self.render_to(templates::HOME, &context, "index.html")
    }

    /// Render the /blog index page
    pub fn render_blog_index(&self, site: &SiteModel) -> Result<PathBuf> {
        let mut context = self.create_base_context();
        context.insert("posts", site.posts());
        self.render_to(templates::BLOG, &context, "blog/index.html")
    }

    /// Render one post page to blog/<slug>/index.html
    pub fn render_post(&self, page: &PostPage<'_>) -> Result<PathBuf> {
        let to_nav = |post: &crate::content::Post| NavPost {
            title: post.title.clone(),
            path: post_path(&post.slug),
        };

        let mut context = self.create_base_context();
        context.insert("post", page.post);
        context.insert("prev", &page.prev.map(to_nav));
        context.insert("next", &page.next.map(to_nav));

        let path = format!("blog/{}/index.html", page.post.slug);
        self.render_to(templates::POST, &context, &path)
    }

    /// Render every post page in sorted order
    pub fn render_posts(&self, site: &SiteModel) -> Result<usize> {
        let mut count = 0;
        for page in site.post_pages() {
            self.render_post(&page)?;
            count += 1;
        }
        tracing::info!("Generated {} post pages", count);
        Ok(count)
    }

    /// Render the /works page
    pub fn render_works(&self, site: &SiteModel) -> Result<PathBuf> {
        let mut context = self.create_base_context();
        context.insert("projects", site.projects());
        self.render_to(templates::WORKS, &context, "works/index.html")
    }

    /// Render the about, 404 and search pages
    pub fn render_static_pages(&self) -> Result<()> {
        let context = self.create_base_context();
        self.render_to(templates::ABOUT, &context, "about/index.html")?;
        self.render_to(templates::NOT_FOUND, &context, "404.html")?;
        self.render_to(templates::SEARCH, &context, "search/index.html")?;
        Ok(())
    }

    /// Write search.json
    pub fn write_search_index(&self, site: &SiteModel) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(site.search_index())?;
        let path = self.write_artifact("search.json", json.as_bytes())?;
        tracing::info!("Generated search.json");
        Ok(path)
    }

    /// Create a base context with common variables
    fn create_base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &SiteData::from(&self.config));
        context
    }

    fn render_to(&self, template: &str, context: &Context, rel_path: &str) -> Result<PathBuf> {
        let html = self.renderer.render(template, context)?;
        self.write_artifact(rel_path, html.as_bytes())
    }

    /// Write a file under the output root, creating parent directories
    fn write_artifact(&self, rel_path: &str, contents: &[u8]) -> Result<PathBuf> {
        let output_path = self.output_dir.join(rel_path);
        if let Some(parent) = output_path.parent() {
            create_dir_all(parent)?;
        }
        fs::write(&output_path, contents).map_err(|source| Error::WriteFile {
            path: output_path.clone(),
            source,
        })?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(output_path)
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
