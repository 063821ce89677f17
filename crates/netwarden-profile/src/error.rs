use thiserror::Error;

/// Result type for profile store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Profile store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Returned when a scope tag does not name a known [`crate::ProfileSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile source: {0}")]
pub struct UnknownProfileSource(pub String);
