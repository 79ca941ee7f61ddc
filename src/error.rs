/// Errors from keyed store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key has no sequence set.
    #[error("key not found: {key}")]
    KeyNotFound { key: &'static str },

    /// The index is past the end of the sequence stored at `key`.
    #[error("index {index} out of range for key {key} (len {len})")]
    IndexOutOfRange {
        key: &'static str,
        index: usize,
        len: usize,
    },

    /// Rendering the store contents failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
