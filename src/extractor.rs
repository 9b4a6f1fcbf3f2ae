//! Extraction engine: pattern-driven XML tree traversal.

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::error::{ExtractError, Result};
use crate::patterns::PatternSet;
use crate::xml::{aggregate_text, strip_namespace};

/// A single extracted element: its own tag name and trimmed text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Tag name of the matched element, without namespace.
    pub tag: String,
    /// Aggregate text of the element and its descendants, trimmed.
    pub value: String,
}

/// Pattern-driven extraction engine.
///
/// Walks a parsed document depth-first, building each element's slash-joined
/// ancestor path and collecting every element whose path contains one of the
/// configured patterns as a substring.
pub struct Extractor {
    patterns: PatternSet,
}

impl Extractor {
    /// Create an engine over the given pattern set.
    #[must_use]
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Extract matches from an XML document source.
    ///
    /// Matches come back in document pre-order, and an element is reported
    /// at most once even when several patterns match its path. A well-formed
    /// document with no matching elements yields `Ok` with an empty vector.
    ///
    /// # Errors
    /// * `EmptyPatternSet` when no patterns are configured; the input is not
    ///   parsed in that case.
    /// * `XmlParse` when the input is not well-formed XML.
    pub fn extract(&self, xml: &str) -> Result<Vec<Match>> {
        if self.patterns.is_empty() {
            return Err(ExtractError::EmptyPatternSet);
        }

        let doc = Document::parse(xml)?;
        self.extract_from_doc(&doc)
    }

    /// Extract matches from an already-parsed document.
    ///
    /// Same semantics as [`extract`](Self::extract), for callers that hold a
    /// parsed tree.
    ///
    /// # Errors
    /// `EmptyPatternSet` when no patterns are configured.
    pub fn extract_from_doc(&self, doc: &Document<'_>) -> Result<Vec<Match>> {
        if self.patterns.is_empty() {
            return Err(ExtractError::EmptyPatternSet);
        }

        Ok(self.walk(doc.root_element(), ""))
    }

    /// Walk a subtree, accumulating matches.
    ///
    /// `prefix` is the slash-joined path of the node's ancestors, empty for
    /// the document root. Every visited element's path is its parent's path
    /// plus its own stripped tag name.
    fn walk(&self, node: Node<'_, '_>, prefix: &str) -> Vec<Match> {
        let mut matches = Vec::new();

        if !node.is_element() {
            return matches;
        }

        let tag = strip_namespace(node.tag_name().name());
        let path = if prefix.is_empty() {
            tag.to_string()
        } else {
            format!("{prefix}/{tag}")
        };

        if self.patterns.matches(&path) {
            matches.push(Match {
                tag: tag.to_string(),
                value: aggregate_text(node),
            });
        }

        for child in node.children() {
            matches.extend(self.walk(child, &path));
        }

        matches
    }
}
