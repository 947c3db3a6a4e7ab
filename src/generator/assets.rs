//! Static asset copying

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::create_dir_all;
use crate::error::{Error, Result};

/// Copy every file under `src` into `dest`, keeping relative paths
///
/// Files are copied byte for byte. A missing `src` copies nothing.
/// Returns the number of files copied.
pub fn copy_static_assets(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        tracing::debug!("No static directory at {:?}", src);
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::ReadDir {
            path: e.path().unwrap_or(src).to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }

        fs::copy(path, &target).map_err(|source| Error::CopyAsset {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;
        copied += 1;
    }

    tracing::info!("Copied {} static assets", copied);
    Ok(copied)
}
