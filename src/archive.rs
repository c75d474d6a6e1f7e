//! Archive manifest derived from a built tree
//!
//! An archive exporter mirrors the displayed tree. To guarantee archive and
//! display never diverge, the manifest is computed from the built tree's
//! nodes rather than from a second filesystem pass. Truncation is a display
//! concern only: withheld items are expanded here.

use std::path::{Path, PathBuf};

use crate::tree::{Folder, TreeItem};

/// One entry an exporter should place in the archive, relative to the
/// traversal root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Flatten a built tree into archive entries. The root folder itself is not
/// listed; paths are relative to it.
pub fn manifest(root: &Folder) -> Vec<ArchiveEntry> {
    let mut entries = Vec::new();
    collect(&root.children, Path::new(""), &mut entries);
    entries
}

fn collect(children: &[TreeItem], base: &Path, entries: &mut Vec<ArchiveEntry>) {
    for child in children {
        match child {
            TreeItem::Folder(folder) => {
                let path = base.join(&folder.meta.name);
                entries.push(ArchiveEntry {
                    path: path.clone(),
                    is_dir: true,
                });
                collect(&folder.children, &path, entries);
            }
            TreeItem::File(file) => {
                entries.push(ArchiveEntry {
                    path: base.join(file.file_name()),
                    is_dir: false,
                });
            }
            TreeItem::Truncated(truncated) => {
                collect(&truncated.withheld, base, entries);
            }
        }
    }
}
