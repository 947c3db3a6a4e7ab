//! List site content

use anyhow::Result;
use indexmap::IndexMap;
use std::fmt::Write;

use crate::content::loader::ContentLoader;
use crate::site::SiteModel;
use crate::Folio;

/// Print site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    print!("{}", listing(folio, content_type)?);
    Ok(())
}

/// Build the listing text for `posts`, `projects` or `tags`
pub fn listing(folio: &Folio, content_type: &str) -> Result<String> {
    let loader = ContentLoader::new(folio);
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let site = SiteModel::build(loader.load_posts()?, Vec::new(), &folio.config.limits);
            writeln!(out, "Posts ({}):", site.posts().len())?;
            for post in site.posts() {
                let date = if post.date.is_empty() { "----------" } else { post.date.as_str() };
                writeln!(out, "  {} - {} [{}]", date, post.title, post.slug)?;
            }
        }
        "project" | "projects" => {
            let projects = loader.load_projects()?;
            writeln!(out, "Projects ({}):", projects.len())?;
            for project in &projects {
                let marker = if project.featured { " *" } else { "" };
                writeln!(out, "  {} [{}]{}", project.title, project.slug, marker)?;
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let mut tags: IndexMap<&str, usize> = IndexMap::new();
            for tag in posts.iter().flat_map(|p| &p.tags) {
                *tags.entry(tag.as_str()).or_insert(0) += 1;
            }
            writeln!(out, "Tags ({}):", tags.len())?;
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, projects, tags",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn folio() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let posts = tmp.path().join("content/posts");
        let projects = tmp.path().join("content/projects");
        fs::create_dir_all(&posts).unwrap();
        fs::create_dir_all(&projects).unwrap();
        fs::write(posts.join("a.md"), "title: A\ndate: 2024-01-01\ntags: rust, cli\n---\n").unwrap();
        fs::write(posts.join("b.md"), "title: B\ndate: 2024-03-01\ntags: rust\n---\n").unwrap();
        fs::write(projects.join("x.md"), "title: X\nfeatured: true\n---\n").unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        (tmp, folio)
    }

    #[test]
    fn test_list_posts_newest_first() {
        let (_tmp, folio) = folio();
        let text = listing(&folio, "posts").unwrap();
        assert_eq!(
            text,
            "Posts (2):\n  2024-03-01 - B [b]\n  2024-01-01 - A [a]\n"
        );
    }

    #[test]
    fn test_list_tags_by_count() {
        let (_tmp, folio) = folio();
        let text = listing(&folio, "tags").unwrap();
        assert_eq!(text, "Tags (2):\n  rust (2)\n  cli (1)\n");
    }

    #[test]
    fn test_list_projects_marks_featured() {
        let (_tmp, folio) = folio();
        assert_eq!(listing(&folio, "projects").unwrap(), "Projects (1):\n  X [x] *\n");
    }

    #[test]
    fn test_unknown_type() {
        let (_tmp, folio) = folio();
        assert!(listing(&folio, "pages").is_err());
    }
}
