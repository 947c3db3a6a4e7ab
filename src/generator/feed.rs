//! RSS feed generation.

use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use std::path::PathBuf;

use super::Generator;
use crate::config::SiteConfig;
use crate::content::Post;
use crate::error::Result;
use crate::helpers::{date_rfc1123, full_url_for, post_path};
use crate::site::SiteModel;
use crate::templates::TemplateEngine;

impl<E: TemplateEngine> Generator<E> {
    /// Write rss.xml with one item per post, newest first
    pub fn write_feed(&self, site: &SiteModel) -> Result<PathBuf> {
        let xml = build_feed(&self.config, site.posts())?;
        let path = self.write_artifact("rss.xml", &xml)?;
        tracing::info!("Generated rss.xml");
        Ok(path)
    }
}

/// Serialize an RSS 2.0 channel for the given posts
pub fn build_feed(config: &SiteConfig, posts: &[Post]) -> Result<Vec<u8>> {
    let items: Vec<_> = posts.iter().map(|post| post_to_item(config, post)).collect();

    let channel = ChannelBuilder::default()
        .title(config.title.clone())
        .link(full_url_for(config.base_url(), "/"))
        .description(config.description.clone())
        .language(Some(config.language.clone()))
        .items(items)
        .build();

    Ok(channel.pretty_write_to(Vec::new(), b' ', 2)?)
}

/// Convert a post to an rss item.
///
/// Posts without a parseable date get no pubDate.
fn post_to_item(config: &SiteConfig, post: &Post) -> rss::Item {
    let link = full_url_for(config.base_url(), &post_path(&post.slug));

    ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .pub_date(post.date_parsed.as_ref().map(date_rfc1123))
        .description(Some(post.description.clone()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn post(slug: &str, date: &str) -> Post {
        let fm = FrontMatter::parse(&[
            format!("title: {} & co", slug),
            format!("date: {}", date),
            "description: About <things>".to_string(),
        ]);
        Post::from_fields(slug, &fm, "")
    }

    fn config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_feed_items() {
        let xml = build_feed(&config(), &[post("hello", "2024-01-05")]).unwrap();
        let xml = String::from_utf8(xml).unwrap();

        assert!(xml.contains(r#"<rss version="2.0""#));
        assert!(xml.contains("<title>Example</title>"));
        assert!(xml.contains("<link>https://example.com/blog/hello/</link>"));
        assert!(xml.contains("<pubDate>Fri, 05 Jan 2024 00:00:00 +0000</pubDate>"));
        assert!(xml.contains("hello &amp; co"));
    }

    #[test]
    fn test_feed_order_and_missing_date() {
        let posts = [post("new", "2024-01-05"), post("undated", "soon")];
        let xml = String::from_utf8(build_feed(&config(), &posts).unwrap()).unwrap();

        let new = xml.find("/blog/new/").unwrap();
        let undated = xml.find("/blog/undated/").unwrap();
        assert!(new < undated);
        assert_eq!(xml.matches("<pubDate>").count(), 1);
    }

    #[test]
    fn test_feed_is_deterministic() {
        let posts = [post("a", "2024-01-05"), post("b", "2023-01-05")];
        assert_eq!(
            build_feed(&config(), &posts).unwrap(),
            build_feed(&config(), &posts).unwrap()
        );
    }
}
