//! Configuration defaults for the extractor CLI.

use std::path::{Path, PathBuf};

/// Default pattern file name, resolved in the current working directory.
pub const DEFAULT_PATTERN_FILE: &str = "elements.txt";

/// Placeholder content written when the pattern file does not exist.
pub const PATTERN_FILE_TEMPLATE: &str = "\
# Add your XML element paths here, one per line.
# Example: ElementName1
# Example: ParentElement/ElementName2
# Example: GrandparentElement/ParentElement/ElementName3
";

/// Resolve the pattern file path, falling back to [`DEFAULT_PATTERN_FILE`].
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use xmlsift::config::pattern_file_path;
///
/// assert_eq!(pattern_file_path(None), PathBuf::from("elements.txt"));
/// assert_eq!(
///     pattern_file_path(Some(Path::new("custom.txt"))),
///     PathBuf::from("custom.txt")
/// );
/// ```
#[must_use]
pub fn pattern_file_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATTERN_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_file_path_default() {
        assert_eq!(pattern_file_path(None), PathBuf::from(DEFAULT_PATTERN_FILE));
    }

    #[test]
    fn test_pattern_file_path_override() {
        let custom = Path::new("conf/paths.txt");
        assert_eq!(pattern_file_path(Some(custom)), custom.to_path_buf());
    }

    #[test]
    fn test_template_contains_only_comments() {
        for line in PATTERN_FILE_TEMPLATE.lines() {
            assert!(line.starts_with('#'), "template line should be a comment: {line}");
        }
    }
}
