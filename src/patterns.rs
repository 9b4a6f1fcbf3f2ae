//! Pattern store: loading and matching element path patterns.
//!
//! Patterns are plain path fragments (e.g. `Parent/Child`), one per line of a
//! text file. Lines that are blank or start with `#` are dropped on load;
//! every other line is kept verbatim, in file order.

use std::fs;
use std::path::Path;

use crate::config::PATTERN_FILE_TEMPLATE;
use crate::error::{ExtractError, Result};

/// An ordered, immutable set of element path patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Create a pattern set from raw pattern strings.
    pub fn new(patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse pattern file content, dropping comment and blank lines.
    ///
    /// Kept lines are not trimmed: a pattern carries leading or interior
    /// whitespace if the file does, and a line that is indented before its
    /// `#` is a pattern, not a comment.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            patterns: content
                .lines()
                .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect(),
        }
    }

    /// Whether the set contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterate over the patterns in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Check whether an element path should be extracted.
    ///
    /// True iff at least one pattern is a case-sensitive substring of `path`.
    /// This is containment over the whole slash-joined path, not per-segment
    /// equality: pattern `Item` matches the path `SubItem/Value`. Existing
    /// pattern files rely on this permissive behavior, so it is kept as is.
    ///
    /// An empty pattern is a substring of every path; the loader filters
    /// blank lines, but the matcher itself does not guard against one.
    ///
    /// # Examples
    /// ```
    /// use xmlsift::PatternSet;
    ///
    /// let patterns = PatternSet::new(["Item"]);
    /// assert!(patterns.matches("Order/Item"));
    /// assert!(patterns.matches("Order/SubItem/Value"));
    /// assert!(!patterns.matches("Order/Line"));
    /// ```
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| path.contains(pattern.as_str()))
    }
}

/// Outcome of loading the pattern file.
#[derive(Debug)]
pub struct LoadedPatterns {
    /// Patterns read from the file.
    pub set: PatternSet,
    /// Whether the file was created by this call.
    pub created: bool,
}

/// Load the pattern file, creating it with placeholder comments if absent.
///
/// A freshly created file contains only comments, so its pattern set is
/// empty; callers should direct the user to populate it before extracting.
///
/// # Errors
/// Returns `PatternFile` when the file cannot be read or created.
pub fn load_or_create(path: &Path) -> Result<LoadedPatterns> {
    if !path.exists() {
        fs::write(path, PATTERN_FILE_TEMPLATE).map_err(|source| ExtractError::PatternFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Created pattern file with placeholder comments");
        return Ok(LoadedPatterns {
            set: PatternSet::default(),
            created: true,
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ExtractError::PatternFile {
        path: path.to_path_buf(),
        source,
    })?;
    let set = PatternSet::parse(&content);
    tracing::debug!(path = %path.display(), patterns = set.len(), "Loaded pattern file");

    Ok(LoadedPatterns { set, created: false })
}
