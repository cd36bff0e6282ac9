/// Errors from store operations.
///
/// Reads and writes against a handle never fail; these only arise when a
/// handle is decoded from its text form or a seed is loaded from disk.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The handle text could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A snapshot entry is keyed under an id that differs from its user's id.
    #[error("snapshot key {key:?} holds user {id:?}")]
    KeyMismatch { key: String, id: String },

    /// I/O error while reading a seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
