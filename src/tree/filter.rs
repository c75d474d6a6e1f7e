//! Entry filtering: explicit patterns plus scoped ignore files
//!
//! Explicit patterns are active at every depth. Gitignore-style files are
//! collected as traversal descends and dropped again on backtrack, so a
//! directory's rules apply to its own subtree and never leak into siblings.
//! When scopes disagree on a path, the deeper one wins.

use std::path::Path;

use glob::Pattern;
use ignore::Match;
use ignore::gitignore::Gitignore;

/// Name of the per-directory ignore file.
pub const IGNORE_FILE: &str = ".gitignore";

/// Hidden is a classification independent of ignored; both can hold for the
/// same entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// A pattern from `-I`/`extra_ignores`, matched against entry names.
/// A trailing slash restricts the pattern to directories, as in ignore files.
#[derive(Debug)]
struct ExplicitPattern {
    text: String,
    pattern: Option<Pattern>,
    dir_only: bool,
}

impl ExplicitPattern {
    fn compile(raw: &str) -> Self {
        let (text, dir_only) = match raw.strip_suffix('/') {
            Some(stripped) => (stripped.to_string(), true),
            None => (raw.to_string(), false),
        };
        // An invalid glob still matches by exact name.
        let pattern = Pattern::new(&text).ok();
        Self {
            text,
            pattern,
            dir_only,
        }
    }

    fn matches(&self, name: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        name == self.text || self.pattern.as_ref().is_some_and(|p| p.matches(name))
    }
}

/// Decides per-entry exclusion during traversal.
///
/// Holds the active ignore scopes as a stack: `enter` pushes the rules found
/// in a directory, `exit` drops everything pushed since the matching mark.
pub struct IgnoreMatcher {
    explicit: Vec<ExplicitPattern>,
    scopes: Vec<Gitignore>,
    respect_gitignore: bool,
    gitignore_depth: Option<usize>,
}

impl IgnoreMatcher {
    pub fn new(
        extra_ignores: &[String],
        respect_gitignore: bool,
        gitignore_depth: Option<usize>,
    ) -> Self {
        Self {
            explicit: extra_ignores
                .iter()
                .map(|raw| ExplicitPattern::compile(raw))
                .collect(),
            scopes: Vec::new(),
            respect_gitignore,
            gitignore_depth,
        }
    }

    /// Collect `dir`'s ignore file if present and within the configured
    /// depth. Returns a mark for the matching `exit` call.
    pub fn enter(&mut self, dir: &Path, depth: usize) -> usize {
        let mark = self.scopes.len();
        if !self.respect_gitignore {
            return mark;
        }
        if self.gitignore_depth.is_some_and(|max| depth > max) {
            return mark;
        }
        let file = dir.join(IGNORE_FILE);
        if file.is_file() {
            // Unreadable or malformed files contribute zero patterns.
            let (rules, _err) = Gitignore::new(&file);
            if !rules.is_empty() {
                self.scopes.push(rules);
            }
        }
        mark
    }

    /// Drop every scope pushed since the matching `enter`.
    pub fn exit(&mut self, mark: usize) {
        self.scopes.truncate(mark);
    }

    /// Whether the entry at `path` (named `name`) is excluded under the
    /// active scopes.
    pub fn should_ignore(&self, path: &Path, name: &str, is_dir: bool) -> bool {
        // Always ignore .git directories.
        if name == ".git" {
            return true;
        }

        for pattern in &self.explicit {
            if pattern.matches(name, is_dir) {
                return true;
            }
        }

        // Nearest scope wins: a deeper ignore file overrides a shallower one.
        for rules in self.scopes.iter().rev() {
            match rules.matched(path, is_dir) {
                Match::None => continue,
                Match::Ignore(_) => return true,
                Match::Whitelist(_) => return false,
            }
        }

        false
    }
}
