//! xmlsift - Extract element values from XML documents.
//!
//! Loads a list of path patterns from a plain-text file, parses an XML
//! document into a tree, and collects the tag name and trimmed text of every
//! element whose slash-joined ancestor path contains one of the patterns as
//! a substring.
//!
//! # Example
//!
//! ```
//! use xmlsift::{Extractor, PatternSet};
//!
//! let patterns = PatternSet::new(["Book/Title"]);
//! let extractor = Extractor::new(patterns);
//!
//! let matches = extractor
//!     .extract("<Catalog><Book><Title>Dune</Title></Book></Catalog>")
//!     .unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].tag, "Title");
//! assert_eq!(matches[0].value, "Dune");
//! ```
//!
//! # Architecture
//!
//! - [`patterns`]: pattern file loading and path matching
//! - [`xml`]: tag name and text content helpers
//! - [`extractor`]: the tree traversal engine
//! - [`error`]: error types and Result alias
//! - [`config`]: defaults and the pattern file template
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod patterns;
pub mod xml;

// Re-export commonly used items
pub use error::{ExtractError, Result};
pub use extractor::{Extractor, Match};
pub use patterns::{load_or_create, LoadedPatterns, PatternSet};
