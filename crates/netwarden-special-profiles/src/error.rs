use netwarden_profile::StoreError;
use thiserror::Error;

/// Result type for special profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors from the special profile subsystem.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("unknown special profile id: {0}")]
    UnknownProfileId(String),

    #[error("invalid upgrade cutoff date {date:?}: {source}")]
    InvalidCutoff {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("profile store error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid special profile config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
