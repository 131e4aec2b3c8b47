//! Browsing a game folder as a lazily expanded tree
//!
//! The tree runs folder → container (`.bndl` file) → entry → record (one
//! named segment) → raw blob (a carved nested record). Nothing below a node
//! is decoded until [`Node::children`] is called on it, so a UI can show a
//! placeholder arrow via [`Node::has_children`] and expand on demand.
//!
//! ```no_run
//! use bndl_rs::browse::Node;
//! use bndl_rs::reader::DecodeOptions;
//!
//! let root = Node::folder("/games/paradise");
//! let options = DecodeOptions::default();
//! for child in root.children(&options).unwrap() {
//!     println!("{}", child.label());
//! }
//! ```

pub mod batch;
mod discover;

pub use discover::{discover_containers, discover_containers_with_progress, is_container_path, Progress};

use crate::entry::{ContainedFile, Entry};
use crate::error::Result;
use crate::names;
use crate::nested::{self, CarvedRecord};
use crate::reader::{Container, DecodeOptions};
use crate::utils;
use bytes::Bytes;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One node of the browse tree
#[derive(Debug, Clone)]
pub enum Node {
    Folder { path: PathBuf },
    Container { path: PathBuf },
    Entry { entry: Arc<Entry> },
    Record { file: ContainedFile },
    RawBlob { record: CarvedRecord },
}

impl Node {
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Node::Folder { path: path.into() }
    }

    pub fn container(path: impl Into<PathBuf>) -> Self {
        Node::Container { path: path.into() }
    }

    pub fn label(&self) -> String {
        match self {
            Node::Folder { path } | Node::Container { path } => file_name(path),
            Node::Entry { entry } => entry.name.to_string(),
            Node::Record { file } => file.name.clone(),
            Node::RawBlob { record } => record.label(),
        }
    }

    /// Label with friendly names applied: well-known folders get their
    /// description, entries get their resource type.
    pub fn display_label(&self) -> String {
        match self {
            Node::Folder { path } => names::folder_display_name(&file_name(path)),
            Node::Entry { entry } => format!("{} ({})", entry.name, entry.type_name()),
            _ => self.label(),
        }
    }

    /// Hex and ASCII rows for the first `limit` payload bytes, then the
    /// alignment report for the whole payload.
    pub fn preview(&self, limit: usize) -> Option<String> {
        let data = self.data()?;
        let head = &data[..data.len().min(limit)];
        Some(format!(
            "{}\n{}\n{}",
            utils::to_hex(head),
            utils::to_ascii(head),
            utils::alignment_info(&self.label(), data.len() as u64)
        ))
    }

    /// Payload bytes, for record and blob nodes
    pub fn data(&self) -> Option<&Bytes> {
        match self {
            Node::Record { file } => Some(&file.data),
            Node::RawBlob { record } => Some(&record.data),
            _ => None,
        }
    }

    /// Whether expanding this node may produce children.
    ///
    /// Folders and containers always answer `true` since finding out would
    /// mean touching the disk.
    pub fn has_children(&self) -> bool {
        match self {
            Node::Folder { .. } | Node::Container { .. } => true,
            Node::Entry { entry } => entry.segments.iter().flatten().any(|s| !s.is_empty()),
            Node::Record { file } => nested::is_nested_container(&file.data),
            Node::RawBlob { record } => !nested::children(record).is_empty(),
        }
    }

    /// Case-insensitive substring match on the label
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim();
        !text.is_empty() && self.label().to_lowercase().contains(&text.to_lowercase())
    }

    /// Expand one level.
    pub fn children(&self, options: &DecodeOptions) -> Result<Vec<Node>> {
        match self {
            Node::Folder { path } => folder_children(path),
            Node::Container { path } => {
                let container = Container::open_with(path, options)?;
                Ok(container
                    .into_entries()
                    .into_iter()
                    .map(|entry| Node::Entry { entry: Arc::new(entry) })
                    .collect())
            }
            Node::Entry { entry } => Ok(entry
                .contained_files()
                .into_iter()
                .map(|file| Node::Record { file })
                .collect()),
            Node::Record { file } => Ok(nested::scan(&file.data)
                .into_iter()
                .map(|record| Node::RawBlob { record })
                .collect()),
            Node::RawBlob { record } => Ok(nested::children(record)
                .into_iter()
                .map(|record| Node::RawBlob { record })
                .collect()),
        }
    }
}

/// Sub-folders first, then container files, each sorted by name
fn folder_children(path: &Path) -> Result<Vec<Node>> {
    let mut folders = Vec::new();
    let mut containers = Vec::new();

    for dir_entry in fs::read_dir(path)? {
        let dir_entry = dir_entry?;
        // `DirEntry::file_type` does not follow symlinks.
        let file_type = dir_entry.file_type()?;
        let child = dir_entry.path();
        if file_type.is_dir() {
            folders.push(child);
        } else if file_type.is_file() && is_container_path(&child) {
            containers.push(child);
        }
    }

    folders.sort();
    containers.sort();

    Ok(folders
        .into_iter()
        .map(Node::folder)
        .chain(containers.into_iter().map(Node::container))
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
