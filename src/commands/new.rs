//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::loader::ContentLoader;
use crate::content::reader::{CONTENT_EXTENSION, DELIMITER};
use crate::helpers::date_ymd;
use crate::Folio;

/// Create a post file named after the slugified title
pub fn create_post(folio: &Folio, title: &str, date: NaiveDate) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = ContentLoader::new(folio).posts_dir();
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.{}", slug, CONTENT_EXTENSION));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "title: {}\ndate: {}\ndescription: \ntags: \n{}\n<p></p>\n",
        title.trim(),
        date_ymd(&date),
        DELIMITER
    );
    fs::write(&file_path, content)?;

    Ok(file_path)
}

/// Run the new command
pub fn run(folio: &Folio, title: &str) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let path = create_post(folio, title, today)?;
    println!("Created: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reader::RawDocument;
    use crate::content::Post;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_new_post_is_loadable() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        let path = create_post(&folio, "Hello World!", date()).unwrap();
        assert_eq!(path, tmp.path().join("content/posts/hello-world.md"));

        let text = fs::read_to_string(&path).unwrap();
        let post = Post::from_document(&RawDocument::from_text("hello-world", &path, &text));
        assert_eq!(post.title, "Hello World!");
        assert_eq!(post.date, "2024-01-05");
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_new_post_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        create_post(&folio, "Twice", date()).unwrap();
        assert!(create_post(&folio, "Twice", date()).is_err());
    }

    #[test]
    fn test_new_post_rejects_empty_slug() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(create_post(&folio, "!!!", date()).is_err());
    }
}
