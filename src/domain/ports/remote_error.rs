//! Errors reported by remote platform clients
//!
//! "Not found" is its own variant so callers can tell a missing resource
//! (often an expected first-deploy state) from a failed request.

/// Result type for remote client operations
pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The addressed resource does not exist
    NotFound { resource: String },
    /// The request failed for any other reason
    Failed { operation: String, message: String },
}

impl RemoteError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        RemoteError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::Failed {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::NotFound { .. })
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::NotFound { resource } => write!(f, "{} not found", resource),
            RemoteError::Failed { operation, message } => write!(f, "{}: {}", operation, message),
        }
    }
}

impl std::error::Error for RemoteError {}
