use super::StorageError;

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    /// A caller passed a value the operation does not recognize.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An operation was called in a state where its contract does not hold.
    #[error("precondition violated: {reason}")]
    PreconditionViolation { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl SieveError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            reason: reason.into(),
        }
    }
}

pub type SieveResult<T> = Result<T, SieveError>;
