use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for dictionary and alignment operations
#[derive(Debug, Error)]
pub enum AlignError {
    /// The backing word store could not be reached at all
    #[error("word store unavailable: {0}")]
    SourceUnavailable(String),

    /// A per-language read from the word store failed mid-stream
    #[error("query for language '{lang}' failed: {reason}")]
    Query { lang: String, reason: String },

    /// The dictionary cache file exists but could not be read
    #[error("failed to read dictionary cache {path}: {source}")]
    CacheRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dictionary cache file exists but is not valid JSON of the expected shape
    #[error("dictionary cache {path} is corrupt: {source}")]
    CacheCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A vocabulary input file is missing
    #[error("vocabulary file not found: {0}")]
    VocabularyNotFound(PathBuf),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlignError {
    /// Create a SourceUnavailable error
    pub fn source_unavailable(reason: impl Into<String>) -> Self {
        Self::SourceUnavailable(reason.into())
    }

    /// Create a Query error for a language table
    pub fn query(lang: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Query {
            lang: lang.into(),
            reason: reason.into(),
        }
    }

    /// Create a CacheRead error from a path and IO error
    pub fn cache_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheRead {
            path: path.into(),
            source,
        }
    }

    /// Create a CacheCorrupt error from a path and JSON error
    pub fn cache_corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CacheCorrupt {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for AlignError
pub type Result<T> = std::result::Result<T, AlignError>;
