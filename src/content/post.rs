//! Post and Project models

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

use super::reader::RawDocument;
use super::FrontMatter;
use crate::helpers::{parse_iso_date, read_time};

/// HTML that came from a content file and is inserted into pages unescaped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Slug (source filename without extension)
    pub slug: String,

    /// Date exactly as written in the header
    pub date: String,

    /// Parsed publication date, `None` when missing or malformed
    pub date_parsed: Option<NaiveDate>,

    pub description: String,

    /// Post tags, in written order without duplicates
    pub tags: Vec<String>,

    /// Estimated minutes to read, at least 1
    pub read_time_minutes: u32,

    /// Body content
    pub body: TrustedHtml,
}

impl Post {
    /// Build a post from a split content file
    pub fn from_document(doc: &RawDocument) -> Self {
        let fm = FrontMatter::parse(&doc.header);
        let post = Self::from_fields(&doc.slug, &fm, &doc.body);

        if !post.date.is_empty() && post.date_parsed.is_none() {
            tracing::warn!(
                "Unparseable date {:?} in {:?}, sorting it as the oldest post",
                post.date,
                doc.path
            );
        }

        post
    }

    /// Typed conversion from raw header fields
    pub fn from_fields(slug: &str, fm: &FrontMatter, body: &str) -> Self {
        let date = fm.string("date");
        let date_parsed = parse_iso_date(&date);

        Self {
            title: fm.string("title"),
            slug: slug.to_string(),
            date,
            date_parsed,
            description: fm.string("description"),
            tags: fm.get("tags").map(parse_tags).unwrap_or_default(),
            read_time_minutes: read_time(body),
            body: TrustedHtml::new(body),
        }
    }

    /// Key used to order posts, missing dates rank as the oldest
    pub fn sort_date(&self) -> NaiveDate {
        self.date_parsed.unwrap_or(NaiveDate::MIN)
    }
}

/// A portfolio project
#[derive(Debug, Clone, Default, Serialize)]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Image URL
    pub image: Option<String>,
    /// Source code URL
    pub code: Option<String>,
    /// Live demo URL
    pub demo: Option<String>,
    /// Shown on the home page when true
    pub featured: bool,
}

impl Project {
    /// Build a project from a split content file
    pub fn from_document(doc: &RawDocument) -> Self {
        let fm = FrontMatter::parse(&doc.header);
        Self::from_fields(&doc.slug, &fm)
    }

    /// Typed conversion from raw header fields
    pub fn from_fields(slug: &str, fm: &FrontMatter) -> Self {
        Self {
            title: fm.string("title"),
            slug: slug.to_string(),
            description: fm.string("description"),
            image: fm.optional("image"),
            code: fm.optional("code"),
            demo: fm.optional("demo"),
            featured: fm.get("featured") == Some("true"),
        }
    }
}

/// Split a comma separated tag list
fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
