//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for canopy operations.
///
/// Only root-level failures are fatal. Per-entry failures during traversal
/// (unreadable subdirectories, unreadable ignore files) never surface here;
/// they become warnings on the builder.
#[derive(Debug, Error)]
pub enum CanopyError {
    #[error("path not found: {0}")]
    RootNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
