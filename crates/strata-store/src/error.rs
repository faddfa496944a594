use std::path::PathBuf;

/// Errors from metastore operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Path resolution escaped the base directory. Raised before any I/O and
    /// never downgraded into an I/O error.
    #[error("path traversal detected: {path:?} escapes base directory {base:?}")]
    PathTraversal { base: PathBuf, path: PathBuf },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store does not accept writes (federated composites).
    #[error("store is read-only")]
    ReadOnly,

    /// No handler is registered for the record type.
    #[error("no storage handler for type suffix {0:?}")]
    NoHandler(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
