//! Output configuration types

/// Configuration for rendering decoration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Prefix entries with folder/file emoji.
    pub emoji: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            emoji: false,
        }
    }
}
