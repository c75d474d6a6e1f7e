//! Canopy - a tree command with depth-scoped ignore rules

pub mod archive;
pub mod clipboard;
pub mod error;
pub mod output;
pub mod tree;

pub use archive::{ArchiveEntry, manifest};
pub use error::CanopyError;
pub use output::{OutputConfig, Summary, TreeFormatter, format_summary, print_json, print_summary};
pub use tree::{Folder, TreeBuilder, TreeItem, WalkerConfig};
