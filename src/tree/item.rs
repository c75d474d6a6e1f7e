//! Tree item model
//!
//! The built tree is a closed sum type: folders, files, and the truncation
//! placeholder standing in for an elided tail of children. Shared attributes
//! live in `ItemMeta`, so adding a node kind forces every consumer match to
//! handle it.

use serde::Serialize;

/// Attributes shared by every node in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct ItemMeta {
    pub name: String,
    /// Distance from the traversal root (root = 0).
    pub depth: usize,
    pub ignored: bool,
    pub hidden: bool,
}

/// A node in the built tree.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeItem {
    Folder(Folder),
    File(File),
    Truncated(Truncated),
}

impl TreeItem {
    pub fn meta(&self) -> &ItemMeta {
        match self {
            TreeItem::Folder(folder) => &folder.meta,
            TreeItem::File(file) => &file.meta,
            TreeItem::Truncated(truncated) => &truncated.meta,
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn depth(&self) -> usize {
        self.meta().depth
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeItem::Folder(_))
    }
}

/// A directory node. A folder with no children is a valid leaf.
#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    #[serde(flatten)]
    pub meta: ItemMeta,
    pub children: Vec<TreeItem>,
}

impl Folder {
    pub fn new(name: impl Into<String>, depth: usize, hidden: bool) -> Self {
        Self {
            meta: ItemMeta {
                name: name.into(),
                depth,
                ignored: false,
                hidden,
            },
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: TreeItem) {
        self.children.push(child);
    }
}

/// A file node. `extension` keeps its leading dot and is empty when the
/// name has none.
#[derive(Debug, Clone, Serialize)]
pub struct File {
    #[serde(flatten)]
    pub meta: ItemMeta,
    pub extension: String,
    /// Hint for content-loading consumers (archive exporters). Irrelevant
    /// to layout.
    pub include_contents: bool,
}

impl File {
    pub fn new(file_name: &str, depth: usize, hidden: bool, include_contents: bool) -> Self {
        let (name, extension) = split_file_name(file_name);
        Self {
            meta: ItemMeta {
                name,
                depth,
                ignored: false,
                hidden,
            },
            extension,
            include_contents,
        }
    }

    /// The on-disk name, `name + extension`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.meta.name, self.extension)
    }
}

/// Placeholder for children elided by a `max_items` cap. The withheld items
/// are retained so aggregation passes still see true totals.
#[derive(Debug, Clone, Serialize)]
pub struct Truncated {
    #[serde(flatten)]
    pub meta: ItemMeta,
    #[serde(skip_serializing)]
    pub withheld: Vec<TreeItem>,
}

impl Truncated {
    pub fn new(withheld: Vec<TreeItem>, depth: usize) -> Self {
        Self {
            meta: ItemMeta {
                name: format!("... and {} more items", withheld.len()),
                depth,
                ignored: false,
                hidden: false,
            },
            withheld,
        }
    }

    pub fn count(&self) -> usize {
        self.withheld.len()
    }
}

/// Split a file name into stem and extension at the last dot. Leading dots
/// never start an extension: `.env` has none, and `archive.tar.gz` splits
/// into `archive.tar` + `.gz`.
pub fn split_file_name(name: &str) -> (String, String) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) if idx > 0 => {
            let split = leading + idx;
            (name[..split].to_string(), name[split..].to_string())
        }
        _ => (name.to_string(), String::new()),
    }
}
