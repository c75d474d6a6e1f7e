//! Tree formatter
//!
//! Converts a built tree into box-drawn text, one line per node in strict
//! pre-order. `format` produces a plain string; `print` writes to stdout
//! with colors.
//!
//! Each ancestor level contributes a four-column segment to a line's prefix:
//! a vertical continuation while that ancestor still has siblings below,
//! blank once it was the last child.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{File, Folder, TreeItem, Truncated};

use super::config::OutputConfig;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

const EMPTY_FOLDER_EMOJI: &str = "📁 ";
const FOLDER_EMOJI: &str = "📂 ";
const FILE_EMOJI: &str = "📄 ";

/// Formatter for built trees.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree into a plain string.
    pub fn format(&self, root: &Folder) -> String {
        let mut output = String::new();
        self.format_folder(root, &mut output, "", true, true);
        output
    }

    /// Print the tree to stdout, colorized when enabled.
    pub fn print(&self, root: &Folder) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_folder(root, &mut stdout, "", true, true)
    }

    fn connector(is_last: bool) -> &'static str {
        if is_last { LAST_BRANCH } else { BRANCH }
    }

    fn child_prefix(prefix: &str, is_last: bool, is_root: bool) -> String {
        if is_root {
            String::new()
        } else if is_last {
            format!("{}{}", prefix, SPACE)
        } else {
            format!("{}{}", prefix, VERTICAL)
        }
    }

    fn folder_emoji(folder: &Folder) -> &'static str {
        if folder.children.is_empty() {
            EMPTY_FOLDER_EMOJI
        } else {
            FOLDER_EMOJI
        }
    }

    fn format_folder(
        &self,
        folder: &Folder,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) {
        output.push_str(prefix);
        if !is_root {
            output.push_str(Self::connector(is_last));
        }
        if self.config.emoji {
            output.push_str(Self::folder_emoji(folder));
        }
        output.push_str(&folder.meta.name);
        output.push('/');
        output.push('\n');

        let child_prefix = Self::child_prefix(prefix, is_last, is_root);
        let count = folder.children.len();
        for (i, child) in folder.children.iter().enumerate() {
            let child_is_last = i == count - 1;
            match child {
                TreeItem::Folder(f) => {
                    self.format_folder(f, output, &child_prefix, child_is_last, false)
                }
                TreeItem::File(f) => self.format_file(f, output, &child_prefix, child_is_last),
                TreeItem::Truncated(t) => {
                    self.format_truncated(t, output, &child_prefix, child_is_last)
                }
            }
        }
    }

    fn format_file(&self, file: &File, output: &mut String, prefix: &str, is_last: bool) {
        output.push_str(prefix);
        output.push_str(Self::connector(is_last));
        if self.config.emoji {
            output.push_str(FILE_EMOJI);
        }
        output.push_str(&file.meta.name);
        output.push_str(&file.extension);
        output.push('\n');
    }

    // Truncation markers carry no decoration.
    fn format_truncated(&self, item: &Truncated, output: &mut String, prefix: &str, is_last: bool) {
        output.push_str(prefix);
        output.push_str(Self::connector(is_last));
        output.push_str(&item.meta.name);
        output.push('\n');
    }

    fn print_folder(
        &self,
        folder: &Folder,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        write!(stdout, "{}", prefix)?;
        if !is_root {
            write!(stdout, "{}", Self::connector(is_last))?;
        }
        if self.config.emoji {
            write!(stdout, "{}", Self::folder_emoji(folder))?;
        }
        let color = if folder.meta.hidden {
            Color::Cyan
        } else {
            Color::Blue
        };
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{}/", folder.meta.name)?;
        stdout.reset()?;
        writeln!(stdout)?;

        let child_prefix = Self::child_prefix(prefix, is_last, is_root);
        let count = folder.children.len();
        for (i, child) in folder.children.iter().enumerate() {
            let child_is_last = i == count - 1;
            match child {
                TreeItem::Folder(f) => {
                    self.print_folder(f, stdout, &child_prefix, child_is_last, false)?
                }
                TreeItem::File(f) => self.print_file(f, stdout, &child_prefix, child_is_last)?,
                TreeItem::Truncated(t) => {
                    self.print_truncated(t, stdout, &child_prefix, child_is_last)?
                }
            }
        }
        Ok(())
    }

    fn print_file(
        &self,
        file: &File,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        write!(stdout, "{}{}", prefix, Self::connector(is_last))?;
        if self.config.emoji {
            write!(stdout, "{}", FILE_EMOJI)?;
        }
        let mut spec = ColorSpec::new();
        if file.meta.hidden {
            spec.set_fg(Some(Color::Black)).set_intense(true);
        } else {
            spec.set_fg(Some(Color::White));
        }
        stdout.set_color(&spec)?;
        write!(stdout, "{}{}", file.meta.name, file.extension)?;
        stdout.reset()?;
        writeln!(stdout)
    }

    fn print_truncated(
        &self,
        item: &Truncated,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        writeln!(
            stdout,
            "{}{}{}",
            prefix,
            Self::connector(is_last),
            item.meta.name
        )
    }
}
