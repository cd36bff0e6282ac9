use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("invalid user id {id:?}: {reason}")]
    InvalidUserId { id: String, reason: String },
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
