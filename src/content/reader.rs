//! Content reader - enumerates content files and splits header from body

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension of recognized content files
pub const CONTENT_EXTENSION: &str = "md";

/// Line separating the header block from the body
pub const DELIMITER: &str = "---";

/// One content file, split but not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Filename without extension
    pub slug: String,
    /// Full source file path
    pub path: PathBuf,
    /// Lines before the delimiter
    pub header: Vec<String>,
    /// Everything after the delimiter line, verbatim
    pub body: String,
}

impl RawDocument {
    /// Split file text into a document
    pub fn from_text(slug: impl Into<String>, path: impl Into<PathBuf>, text: &str) -> Self {
        let (header, body) = split_document(text);
        Self {
            slug: slug.into(),
            path: path.into(),
            header: header.into_iter().map(str::to_string).collect(),
            body: body.to_string(),
        }
    }
}

/// Split text at the first line that is exactly `---`
///
/// A trailing `\r` on a line is ignored so CRLF files behave like LF files.
/// Without a delimiter the whole text is header and the body is empty.
pub fn split_document(text: &str) -> (Vec<&str>, &str) {
    let mut header = Vec::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        offset += line.len();
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == DELIMITER {
            return (header, &text[offset..]);
        }
        header.push(line);
    }

    (header, "")
}

/// Read every content file directly inside `dir`, in filename order
///
/// Returns `Ok(None)` when nothing exists at `dir`; whether that is an
/// error is up to the caller. A path that exists but is not a directory, or
/// any unreadable entry, aborts the whole read.
pub fn read_documents(dir: &Path) -> Result<Option<Vec<RawDocument>>> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(Error::ReadDir {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::ReadDir {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();

        if !entry.file_type().is_file() || !is_content_file(path) {
            continue;
        }

        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(Error::ReadFile {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidData, "file name is not UTF-8"),
            });
        };

        let text = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        documents.push(RawDocument::from_text(slug, path, &text));
        tracing::debug!("Read: {:?}", path);
    }

    Ok(Some(documents))
}

/// Check if a file has the content extension
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CONTENT_EXTENSION)
        .unwrap_or(false)
}
