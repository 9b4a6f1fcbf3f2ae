//! XML helpers for tag names and text content.

use roxmltree::Node;

/// Strip the namespace qualifier from a tag name, if present.
///
/// Returns the substring after the last namespace delimiter, handling both
/// the `{uri}local` and `prefix:local` forms. A name without a delimiter is
/// returned unchanged, so the operation is idempotent.
///
/// # Examples
/// ```
/// use xmlsift::xml::strip_namespace;
///
/// assert_eq!(strip_namespace("{http://example.com}artikel"), "artikel");
/// assert_eq!(strip_namespace("ns:artikel"), "artikel");
/// assert_eq!(strip_namespace("artikel"), "artikel");
/// ```
#[must_use]
pub fn strip_namespace(tag: &str) -> &str {
    let local = match tag.rfind('}') {
        Some(idx) => &tag[idx + 1..],
        None => tag,
    };
    match local.rfind(':') {
        Some(idx) => &local[idx + 1..],
        None => local,
    }
}

/// Aggregate text content of an element: every descendant text run
/// concatenated in document order, trimmed of leading and trailing
/// whitespace. Nested element tags contribute nothing; interior whitespace
/// is preserved.
#[must_use]
pub fn aggregate_text(node: Node<'_, '_>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            if let Some(t) = descendant.text() {
                text.push_str(t);
            }
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_strip_namespace_clark_notation() {
        assert_eq!(strip_namespace("{http://example.com/ns}Title"), "Title");
    }

    #[test]
    fn test_strip_namespace_prefix() {
        assert_eq!(strip_namespace("cat:Title"), "Title");
    }

    #[test]
    fn test_strip_namespace_without_delimiter() {
        assert_eq!(strip_namespace("Title"), "Title");
    }

    #[test]
    fn test_strip_namespace_empty() {
        assert_eq!(strip_namespace(""), "");
    }

    #[test]
    fn test_strip_namespace_idempotent() {
        let stripped = strip_namespace("{ns}Local");
        assert_eq!(strip_namespace(stripped), stripped);
    }

    #[test]
    fn test_aggregate_text_simple() {
        let doc = Document::parse("<a>  hello  </a>").unwrap();
        assert_eq!(aggregate_text(doc.root_element()), "hello");
    }

    #[test]
    fn test_aggregate_text_nested_elements() {
        let doc = Document::parse("<a>hello <b>world</b>!</a>").unwrap();
        assert_eq!(aggregate_text(doc.root_element()), "hello world!");
    }

    #[test]
    fn test_aggregate_text_preserves_interior_whitespace() {
        // Only the outer ends are trimmed.
        let doc = Document::parse("<a> one <b> two </b> three </a>").unwrap();
        assert_eq!(aggregate_text(doc.root_element()), "one  two  three");
    }

    #[test]
    fn test_aggregate_text_empty_element() {
        let doc = Document::parse("<a><b/></a>").unwrap();
        assert_eq!(aggregate_text(doc.root_element()), "");
    }

    #[test]
    fn test_aggregate_text_skips_comments() {
        let doc = Document::parse("<a>before<!-- ignored -->after</a>").unwrap();
        assert_eq!(aggregate_text(doc.root_element()), "beforeafter");
    }
}
