//! Error types for the extractor.
//!
//! The engine never prints; every failure is returned as a typed error so the
//! CLI boundary decides presentation. An extraction that finds nothing is a
//! normal `Ok` with an empty result, not an error.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the xmlsift library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Pattern set is empty; nothing can be extracted.
    #[error("No patterns configured: the pattern file must contain at least one element path")]
    EmptyPatternSet,

    /// XML parsing failed.
    #[error("Error parsing the XML input: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Pattern file could not be read or created.
    #[error("Failed to access pattern file {}: {source}", .path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML input file could not be read.
    #[error("Failed to read XML file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
