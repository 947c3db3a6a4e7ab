//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use chrono::NaiveDate;
use std::path::PathBuf;

use super::Generator;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::helpers::{date_ymd, escape_xml, full_url_for, post_path};
use crate::site::SiteModel;
use crate::templates::TemplateEngine;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

impl<E: TemplateEngine> Generator<E> {
    /// Write sitemap.xml; `today` is the lastmod of the home and blog pages
    pub fn write_sitemap(&self, site: &SiteModel, today: NaiveDate) -> Result<PathBuf> {
        let xml = Sitemap::new(&self.config, site, today).into_xml();
        let path = self.write_artifact("sitemap.xml", xml.as_bytes())?;
        tracing::info!("Generated sitemap.xml");
        Ok(path)
    }
}

/// Single URL entry in the sitemap
struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: &'static str,
    priority: &'static str,
}

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Fixed top-level pages followed by one entry per post
    fn new(config: &SiteConfig, site: &SiteModel, today: NaiveDate) -> Self {
        let base = config.base_url();
        let today = Some(date_ymd(&today));
        let page = |path: &str, lastmod: Option<String>, changefreq, priority| UrlEntry {
            loc: full_url_for(base, path),
            lastmod,
            changefreq,
            priority,
        };

        let mut urls = vec![
            page("/", today.clone(), "weekly", "1.0"),
            page("/blog/", today, "weekly", "0.9"),
            page("/works/", None, "monthly", "0.8"),
            page("/about/", None, "monthly", "0.7"),
            page("/search/", None, "monthly", "0.5"),
        ];

        urls.extend(site.posts().iter().map(|post| {
            page(
                &post_path(&post.slug),
                post.date_parsed.as_ref().map(date_ymd),
                "yearly",
                "0.7",
            )
        }));

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.changefreq));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::content::{FrontMatter, Post};

    fn post(slug: &str, date: &str) -> Post {
        let fm = FrontMatter::parse(&[format!("date: {}", date)]);
        Post::from_fields(slug, &fm, "")
    }

    fn sitemap_xml(posts: Vec<Post>) -> String {
        let config = SiteConfig {
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        let site = SiteModel::build(posts, vec![], &Limits::default());
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        Sitemap::new(&config, &site, today).into_xml()
    }

    #[test]
    fn test_fixed_entries() {
        let xml = sitemap_xml(vec![]);
        for loc in ["/", "/blog/", "/works/", "/about/", "/search/"] {
            assert!(xml.contains(&format!("<loc>https://example.com{loc}</loc>")), "{loc}");
        }
        assert_eq!(xml.matches("<lastmod>2026-03-01</lastmod>").count(), 2);
        assert_eq!(xml.matches("<url>").count(), 5);
    }

    #[test]
    fn test_post_entries() {
        let xml = sitemap_xml(vec![post("hello", "2024-01-05"), post("undated", "later")]);
        assert!(xml.contains("<loc>https://example.com/blog/hello/</loc>\n    <lastmod>2024-01-05</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/blog/undated/</loc>\n    <changefreq>yearly</changefreq>"));
        assert_eq!(xml.matches("<url>").count(), 7);
    }
}
