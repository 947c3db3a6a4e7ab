//! Content loader - loads posts and projects from the content directory

use std::path::{Path, PathBuf};

use super::reader::read_documents;
use super::{Post, Project};
use crate::error::{Error, Result};
use crate::Folio;

/// Loads content from the content directory
pub struct ContentLoader {
    content_dir: PathBuf,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(folio: &Folio) -> Self {
        Self::from_dir(&folio.content_dir)
    }

    /// Create a loader rooted at an explicit content directory
    pub fn from_dir<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.content_dir.join("posts")
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.content_dir.join("projects")
    }

    /// Load all posts from content/posts, in filename order
    ///
    /// The posts directory is required.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let dir = self.posts_dir();
        let documents = read_documents(&dir)?.ok_or(Error::PostsDirMissing(dir))?;
        Ok(documents.iter().map(Post::from_document).collect())
    }

    /// Load all projects from content/projects, in filename order
    ///
    /// A missing projects directory yields no projects.
    pub fn load_projects(&self) -> Result<Vec<Project>> {
        let dir = self.projects_dir();
        match read_documents(&dir)? {
            Some(documents) => Ok(documents.iter().map(Project::from_document).collect()),
            None => {
                tracing::debug!("No projects directory at {:?}", dir);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_posts_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::from_dir(tmp.path());
        assert!(matches!(loader.load_posts(), Err(Error::PostsDirMissing(_))));
    }

    #[test]
    fn test_missing_projects_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::from_dir(tmp.path());
        assert!(loader.load_projects().unwrap().is_empty());
    }

    #[test]
    fn test_load_posts_and_projects() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("posts")).unwrap();
        fs::create_dir_all(tmp.path().join("projects")).unwrap();
        fs::write(
            tmp.path().join("posts/hello.md"),
            "title: Hello\ndate: 2024-01-05\n---\n<p>Hi</p>",
        )
        .unwrap();
        fs::write(tmp.path().join("projects/b.md"), "title: B\nfeatured: true").unwrap();
        fs::write(tmp.path().join("projects/a.md"), "title: A").unwrap();

        let loader = ContentLoader::from_dir(tmp.path());
        let posts = loader.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello");

        let projects = loader.load_projects().unwrap();
        let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
        assert!(projects[1].featured);
    }
}
