//! TreeBuilder - recursive filtered traversal producing the item tree

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::CanopyError;

use super::config::WalkerConfig;
use super::filter::{IgnoreMatcher, is_hidden};
use super::item::{File, Folder, TreeItem, Truncated};

/// Builds the in-memory tree for a root directory.
///
/// Traversal is single-threaded and depth-first. Each directory is read
/// exactly once; ignore scopes are pushed on entry and popped on exit, so a
/// subtree's rules never apply to its siblings.
pub struct TreeBuilder {
    config: WalkerConfig,
    matcher: IgnoreMatcher,
    warnings: Vec<String>,
}

impl TreeBuilder {
    pub fn new(config: WalkerConfig) -> Self {
        let matcher = IgnoreMatcher::new(
            &config.extra_ignores,
            config.respect_gitignore,
            config.gitignore_depth,
        );
        Self {
            config,
            matcher,
            warnings: Vec::new(),
        }
    }

    /// Build the filtered tree rooted at `root`.
    ///
    /// Only root-level failures are fatal. An unreadable subdirectory
    /// becomes an empty branch and leaves a warning behind.
    pub fn build(&mut self, root: &Path) -> Result<Folder, CanopyError> {
        let metadata = fs::metadata(root).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                CanopyError::RootNotFound(root.to_path_buf())
            } else {
                CanopyError::Io(err)
            }
        })?;
        if !metadata.is_dir() {
            return Err(CanopyError::NotADirectory(root.to_path_buf()));
        }

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let hidden = is_hidden(&name);
        let mut folder = Folder::new(name, 0, hidden);
        self.fill_children(&mut folder, root, 0);
        Ok(folder)
    }

    /// Diagnostics collected during the last build.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn fill_children(&mut self, folder: &mut Folder, dir: &Path, dir_depth: usize) {
        if self.config.max_depth.is_some_and(|max| dir_depth >= max) {
            return;
        }

        let mark = self.matcher.enter(dir, dir_depth);

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                self.warnings
                    .push(format!("cannot read {}: {}", dir.display(), err));
                self.matcher.exit(mark);
                return;
            }
        };
        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        let child_depth = dir_depth + 1;
        for entry in entries {
            let path = entry.path();
            // Symlinks are never followed.
            if path.is_symlink() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let is_dir = path.is_dir();
            let hidden = is_hidden(&name);

            // Past ignore_depth, entries are shown unfiltered.
            let filtered = self.config.ignore_depth.is_none_or(|max| child_depth <= max);
            if filtered {
                if self.matcher.should_ignore(&path, &name, is_dir) {
                    continue;
                }
                if hidden && !self.config.show_all {
                    continue;
                }
            }

            if is_dir {
                let mut child = Folder::new(name, child_depth, hidden);
                self.fill_children(&mut child, &path, child_depth);
                folder.add_child(TreeItem::Folder(child));
            } else if !self.config.dirs_only {
                folder.add_child(TreeItem::File(File::new(
                    &name,
                    child_depth,
                    hidden,
                    self.config.include_contents,
                )));
            }
        }

        self.matcher.exit(mark);

        if let Some(max) = self.config.max_items {
            if folder.children.len() > max {
                let withheld = folder.children.split_off(max);
                folder.add_child(TreeItem::Truncated(Truncated::new(withheld, child_depth)));
            }
        }
    }
}
