//! Storage error types.

/// Errors that can occur while building a store or writing audio to it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A single object write failed.
    #[error("failed to write object '{key}': {source}")]
    Write {
        /// Derived object key the write targeted.
        key: String,
        #[source]
        source: object_store::Error,
    },

    /// The backend could not be constructed (bad endpoint, missing bucket, ...).
    #[error("object store backend error: {0}")]
    Backend(#[from] object_store::Error),

    /// I/O error preparing the local backend root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
