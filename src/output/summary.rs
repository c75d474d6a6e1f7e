//! Aggregate counts over a built tree

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::tree::{Folder, TreeItem};

/// Aggregate counts for a built tree.
///
/// Truncated nodes are counted through their withheld items, so totals
/// reflect the filtered set even when the display was truncated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub folders: usize,
    pub files: usize,
    /// File counts keyed by extension; the empty key collects extensionless
    /// files.
    pub by_extension: BTreeMap<String, usize>,
}

impl Summary {
    /// Collect counts for `root`. The root folder itself is not counted.
    pub fn collect(root: &Folder) -> Self {
        let mut summary = Summary::default();
        summary.visit(&root.children);
        summary
    }

    fn visit(&mut self, children: &[TreeItem]) {
        for child in children {
            match child {
                TreeItem::Folder(folder) => {
                    self.folders += 1;
                    self.visit(&folder.children);
                }
                TreeItem::File(file) => {
                    self.files += 1;
                    *self.by_extension.entry(file.extension.clone()).or_insert(0) += 1;
                }
                TreeItem::Truncated(truncated) => {
                    self.visit(&truncated.withheld);
                }
            }
        }
    }
}

/// Render the summary into its human-readable form.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format!(
        "{} directories, {} files\n",
        summary.folders, summary.files
    ));
    for (extension, count) in &summary.by_extension {
        let label = if extension.is_empty() {
            "(no extension)"
        } else {
            extension.as_str()
        };
        output.push_str(&format!("  {}: {}\n", label, count));
    }
    output
}

/// Print the summary to stdout.
pub fn print_summary(summary: &Summary) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", format_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{File, Truncated};

    fn file(name: &str, depth: usize) -> TreeItem {
        TreeItem::File(File::new(name, depth, false, false))
    }

    #[test]
    fn test_counts_by_extension() {
        let mut root = Folder::new("project", 0, false);
        root.add_child(file("a.rs", 1));
        root.add_child(file("b.rs", 1));
        root.add_child(file("Makefile", 1));
        let mut sub = Folder::new("sub", 1, false);
        sub.add_child(file("c.py", 2));
        root.add_child(TreeItem::Folder(sub));

        let summary = Summary::collect(&root);
        assert_eq!(summary.folders, 1);
        assert_eq!(summary.files, 4);
        assert_eq!(summary.by_extension.get(".rs"), Some(&2));
        assert_eq!(summary.by_extension.get(".py"), Some(&1));
        assert_eq!(summary.by_extension.get(""), Some(&1));
    }

    #[test]
    fn test_counts_through_truncation() {
        let mut root = Folder::new("project", 0, false);
        root.add_child(file("shown.txt", 1));
        let mut sub = Folder::new("sub", 1, false);
        sub.add_child(file("inner.py", 2));
        let withheld = vec![TreeItem::Folder(sub), file("also.txt", 1)];
        root.add_child(TreeItem::Truncated(Truncated::new(withheld, 1)));

        let summary = Summary::collect(&root);
        assert_eq!(summary.folders, 1);
        assert_eq!(summary.files, 3);
        assert_eq!(summary.by_extension.get(".py"), Some(&1));
        assert_eq!(summary.by_extension.get(".txt"), Some(&2));
    }

    #[test]
    fn test_format_lists_extensionless_label() {
        let mut root = Folder::new("project", 0, false);
        root.add_child(file("LICENSE", 1));
        let text = format_summary(&Summary::collect(&root));
        assert!(text.contains("0 directories, 1 files"));
        assert!(text.contains("(no extension): 1"));
    }
}
