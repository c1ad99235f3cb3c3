//! Error types for mirror-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from mirror-core
    #[error(transparent)]
    Core(#[from] mirror_core::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit status: 1 for a missing source root, 2 for a missing
    /// destination root, 3 for anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(mirror_core::Error::SourceMissing { .. }) => 1,
            Self::Core(mirror_core::Error::DestinationMissing { .. }) => 2,
            _ => 3,
        }
    }
}
