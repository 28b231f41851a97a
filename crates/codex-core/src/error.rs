//! Error taxonomy for record lookups.
//!
//! Every variant is terminal for the request that produced it. The loader
//! never retries and never substitutes a fallback value; callers decide how
//! each variant is presented.

use std::path::PathBuf;

/// Result type alias for record lookups.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// No backing file for the requested entity, or the identifier was
    /// rejected before any file access.
    #[error("record not found: {target}")]
    NotFound { target: String },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not well-formed JSON.
    #[error("failed to parse {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    /// Short stable tag for structured logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => "not_found",
            LoadError::ReadFailure { .. } => "read_failure",
            LoadError::ParseFailure { .. } => "parse_failure",
        }
    }

    /// File the failure concerns. `NotFound` carries a description instead.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::NotFound { .. } => None,
            LoadError::ReadFailure { path, .. } | LoadError::ParseFailure { path, .. } => {
                Some(path)
            }
        }
    }

    /// The underlying diagnostic (I/O or parser message), without the path.
    pub fn diagnostic(&self) -> String {
        match self {
            LoadError::NotFound { target } => target.clone(),
            LoadError::ReadFailure { source, .. } => source.to_string(),
            LoadError::ParseFailure { source, .. } => source.to_string(),
        }
    }
}
