use crate::types::ErrorCode;

/// Error types for core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization/deserialization errors.
    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

/// A specialized `Result` type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A configuration the Translator refused to turn into button options.
///
/// `is_fatal` means the button instance cannot function, never that the host process must stop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    pub is_fatal: bool,
}

impl ValidationError {
    /// An `invalidConfiguration` failure that leaves the button unusable.
    pub fn fatal(message: impl Into<String>) -> Self {
        ValidationError {
            code: ErrorCode::InvalidConfiguration,
            message: message.into(),
            is_fatal: true,
        }
    }

    /// An `invalidConfiguration` failure the button can degrade from.
    pub fn non_fatal(message: impl Into<String>) -> Self {
        ValidationError {
            code: ErrorCode::InvalidConfiguration,
            message: message.into(),
            is_fatal: false,
        }
    }
}

impl From<Error> for ValidationError {
    fn from(err: Error) -> Self {
        ValidationError::fatal(format!("Failed to encode session data: {err}"))
    }
}
