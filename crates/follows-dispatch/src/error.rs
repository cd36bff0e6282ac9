use follows_types::UserId;
use thiserror::Error;

/// Classified dispatch failures. None of these are transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The user addressed by the request does not exist in the snapshot.
    #[error("target user not found: {0}")]
    TargetNotFound(UserId),

    /// The related user of a follow does not exist, or the related user of
    /// an unfollow is not currently followed.
    #[error("invalid related user: {0}")]
    RelatedUserInvalid(String),

    /// The action kind is not one of `view`, `follow`, `unfollow`.
    #[error("unrecognized action: {0}")]
    UnrecognizedAction(String),
}

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
