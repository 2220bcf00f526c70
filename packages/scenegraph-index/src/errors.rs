//! Error types for scenegraph-index
//!
//! Provides unified error handling across the crate. Every failure a caller
//! can observe is a distinct variant; `kind()` flattens them for branching.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::graph_store::GraphStoreError;

/// Error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Merge received a value that is not a build result
    InvalidResultType,
    /// Merge received a result built from another input
    IdentityMismatch,
    /// Query before a successful merge
    NotReady,
    /// Input text could not be interpreted
    MalformedInput,
    /// Interruption check asked the build to stop
    Cancelled,
    /// Graph store precondition violated
    Store,
    /// Configuration errors
    Config,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidResultType => "invalid_result_type",
            ErrorKind::IdentityMismatch => "identity_mismatch",
            ErrorKind::NotReady => "not_ready",
            ErrorKind::MalformedInput => "malformed_input",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Store => "store",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for scenegraph-index operations
#[derive(Debug, Error)]
pub enum SceneCacheError {
    #[error("Merge rejected: value is not a scene build result")]
    InvalidResultType,

    #[error("Merge rejected: result was built from {built:?}, expected {expected:?}")]
    IdentityMismatch { expected: PathBuf, built: PathBuf },

    #[error("Cache is not ready: merge a finished build before querying")]
    NotReady,

    /// `line` is 1-based
    #[error("Malformed input at line {line}: invalid {field} in {text:?}")]
    MalformedInput {
        line: usize,
        field: &'static str,
        text: String,
    },

    #[error("Build cancelled by interrupt check")]
    Cancelled,

    #[error("Graph store error: {0}")]
    Store(#[from] GraphStoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SceneCacheError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SceneCacheError::InvalidResultType => ErrorKind::InvalidResultType,
            SceneCacheError::IdentityMismatch { .. } => ErrorKind::IdentityMismatch,
            SceneCacheError::NotReady => ErrorKind::NotReady,
            SceneCacheError::MalformedInput { .. } => ErrorKind::MalformedInput,
            SceneCacheError::Cancelled => ErrorKind::Cancelled,
            SceneCacheError::Store(_) => ErrorKind::Store,
            SceneCacheError::Config(_) => ErrorKind::Config,
            SceneCacheError::Io(_) => ErrorKind::IO,
        }
    }

    /// True if calling build again with the same input continues the work
    pub fn is_resumable(&self) -> bool {
        matches!(self, SceneCacheError::Cancelled)
    }

    /// Create a malformed-input error
    pub fn malformed(line: usize, field: &'static str, text: impl Into<String>) -> Self {
        SceneCacheError::MalformedInput {
            line,
            field,
            text: text.into(),
        }
    }
}

/// Result type alias for scenegraph-index operations
pub type Result<T> = std::result::Result<T, SceneCacheError>;
