//! Common error handling utilities and conventions

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types that can be shared across crates
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum CoreError {
    #[error("IO operation failed: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CoreError {
    /// Create an IO error
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_error(err.to_string())
    }
}

/// Rejection produced by client-side form validation.
///
/// The `Display` text is what gets shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username must be alphanumeric and non-empty")]
    InvalidUsername,

    #[error("Password must be alphanumeric and non-empty")]
    InvalidPassword,

    #[error("Essay must be between {min} and {max} characters.")]
    EssayLength { min: usize, max: usize, actual: usize },

    #[error("Review content length must be {min}-{max} characters.")]
    ReviewLength { min: usize, max: usize, actual: usize },

    #[error("Rank must be between 1 and 3.")]
    RankOutOfRange(i64),
}
