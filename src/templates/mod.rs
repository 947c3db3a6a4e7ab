//! Built-in theme templates using Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping stays on
//! for `.html` templates; post bodies are the only values marked `safe`.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::helpers::{full_date, parse_iso_date};

pub const HOME: &str = "home.html";
pub const BLOG: &str = "blog.html";
pub const POST: &str = "post.html";
pub const WORKS: &str = "works.html";
pub const ABOUT: &str = "about.html";
pub const NOT_FOUND: &str = "404.html";
pub const SEARCH: &str = "search.html";

/// Stylesheet and scripts the theme links to, keyed by output path
pub const THEME_ASSETS: &[(&str, &[u8])] = &[
    ("css/style.css", include_bytes!("theme/static/css/style.css")),
    ("js/search.js", include_bytes!("theme/static/js/search.js")),
];

/// Anything that can turn a named template and a context into a page
pub trait TemplateEngine {
    /// Render a template with the given context
    fn render(&self, template_name: &str, context: &Context) -> Result<String>;
}

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        Self::with_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            (HOME, include_str!("theme/home.html")),
            (BLOG, include_str!("theme/blog.html")),
            (POST, include_str!("theme/post.html")),
            (WORKS, include_str!("theme/works.html")),
            (ABOUT, include_str!("theme/about.html")),
            (NOT_FOUND, include_str!("theme/404.html")),
            (SEARCH, include_str!("theme/search.html")),
            // Partials
            ("partials/nav.html", include_str!("theme/partials/nav.html")),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
        ])
    }

    /// Create a renderer from an explicit set of templates
    pub fn with_templates(templates: Vec<(&str, &str)>) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(templates)
            .map_err(|source| Error::Template {
                name: "<theme>".to_string(),
                source,
            })?;

        // Register custom filters
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }
}

impl TemplateEngine for TemplateRenderer {
    fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template_name, context)
            .map_err(|source| Error::Template {
                name: template_name.to_string(),
                source,
            })
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!("{}…", truncated.trim_end())))
    }
}

/// Tera filter: format a raw `YYYY-MM-DD` date
///
/// `format="LL"` gives "January 05, 2024". Unparseable input is returned
/// unchanged.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    if format == "LL" {
        if let Some(date) = parse_iso_date(&s) {
            return Ok(tera::Value::String(full_date(&date)));
        }
    }

    Ok(tera::Value::String(s))
}

/// Site-wide values available to every template as `site`
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.base_url().to_string(),
        }
    }
}

/// Link to an adjacent post
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}
