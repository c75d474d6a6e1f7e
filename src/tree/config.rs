//! Configuration types for tree building

/// Configuration for traversal, filtering, and truncation.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Include hidden (dotfile) entries.
    pub show_all: bool,
    /// Deepest level whose children are enumerated (None = unlimited).
    pub max_depth: Option<usize>,
    /// Omit file nodes entirely.
    pub dirs_only: bool,
    /// Explicit glob patterns, active at every depth. A trailing slash
    /// restricts a pattern to directories.
    pub extra_ignores: Vec<String>,
    /// Collect per-directory ignore files.
    pub respect_gitignore: bool,
    /// Deepest directory whose ignore file is still collected
    /// (None = unlimited).
    pub gitignore_depth: Option<usize>,
    /// Deepest level at which filtering applies at all; past it, entries are
    /// shown unfiltered (None = unlimited).
    pub ignore_depth: Option<usize>,
    /// Per-folder cap on displayed children (None = unlimited). Overflow is
    /// collapsed into a single truncation placeholder.
    pub max_items: Option<usize>,
    /// Mark file nodes for content loading by downstream consumers.
    pub include_contents: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            show_all: false,
            max_depth: None,
            dirs_only: false,
            extra_ignores: Vec::new(),
            respect_gitignore: true,
            gitignore_depth: None,
            ignore_depth: None,
            max_items: None,
            include_contents: false,
        }
    }
}
