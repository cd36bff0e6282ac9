use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use follows_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] follows_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Request-level failures, each answered with a bare status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("not acceptable: {0}")]
    NotAcceptable(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), error = %self, "request failed");
        self.status().into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::TargetNotFound(id) => ApiError::NotFound(id.into_string()),
            DispatchError::RelatedUserInvalid(id) => ApiError::NotAcceptable(id),
            DispatchError::UnrecognizedAction(kind) => ApiError::BadRequest(kind),
        }
    }
}
