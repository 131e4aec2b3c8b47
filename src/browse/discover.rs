// src/browse/discover.rs
use crate::error::Result;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Container file extension, matched case-insensitively
pub const CONTAINER_EXTENSION: &str = "bndl";

/// Progress of a multi-file operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    pub current: PathBuf,
}

impl Progress {
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.done * 100 / self.total
        }
    }
}

pub fn is_container_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(CONTAINER_EXTENSION))
        .unwrap_or(false)
}

/// Every `.bndl` file below `root`, sorted
pub fn discover_containers(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    discover_containers_with_progress(root, |_| {})
}

/// Like [`discover_containers`], reporting each file once the listing is
/// complete.
pub fn discover_containers_with_progress(
    root: impl AsRef<Path>,
    mut progress: impl FnMut(&Progress),
) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    // Symlinks are listed but never followed, so link cycles cannot recurse.
    for dir_entry in WalkDir::new(root.as_ref())
        .follow_links(false)
        .sort_by_file_name()
    {
        let dir_entry = dir_entry.map_err(io::Error::from)?;
        if dir_entry.file_type().is_file() && is_container_path(dir_entry.path()) {
            found.push(dir_entry.into_path());
        }
    }
    found.sort();

    let total = found.len();
    for (i, path) in found.iter().enumerate() {
        progress(&Progress {
            done: i + 1,
            total,
            current: path.clone(),
        });
    }

    log::debug!("found {} container(s) under {}", total, root.as_ref().display());
    Ok(found)
}
