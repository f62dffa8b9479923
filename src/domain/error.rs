// src/domain/error.rs
use thiserror::Error;

/// Failure reported by a collaborator (record service, search index, publisher).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("note not found: {0}")]
    NotFound(String),
    #[error("note already exists: {0}")]
    AlreadyExists(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Other(String),
}

/// Operation-level error surfaced to the caller of a single entry point.
///
/// Every variant is request-scoped; none of them terminates the process.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("no caller identity available to derive the author")]
    MissingCallerIdentity,
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("unknown note field: {0}")]
    UnknownField(String),
    #[error("{operation} failed: {source}")]
    Backend {
        operation: &'static str,
        #[source]
        source: BackendError,
    },
    #[error("publishing to {topic} failed: {source}")]
    Publish {
        topic: String,
        #[source]
        source: BackendError,
    },
    #[error("operation deadline exceeded")]
    DeadlineExceeded,
}

impl GatewayError {
    pub fn backend(operation: &'static str, source: BackendError) -> Self {
        Self::Backend { operation, source }
    }

    /// Stable machine-readable code placed in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCallerIdentity => "MISSING_CALLER_IDENTITY",
            Self::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",
            Self::UnknownField(_) => "UNKNOWN_FIELD",
            Self::Backend { .. } => "BACKEND_FAILURE",
            Self::Publish { .. } => "PUBLISH_FAILURE",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }
}
