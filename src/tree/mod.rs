//! Directory tree building
//!
//! This module builds the in-memory tree a render or export pass consumes:
//!
//! - `item` - the `TreeItem` sum type (`Folder` / `File` / `Truncated`)
//! - `filter` - explicit patterns plus scoped ignore files
//! - `walker` - the recursive `TreeBuilder`
//! - `config` - traversal options

mod config;
mod filter;
mod item;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::{IGNORE_FILE, IgnoreMatcher, is_hidden};
pub use item::{File, Folder, ItemMeta, TreeItem, Truncated, split_file_name};
pub use walker::TreeBuilder;
