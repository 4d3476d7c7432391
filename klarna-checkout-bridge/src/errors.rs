use serde_json::json;

use klarna_checkout_core::types::AnyJson;

/// Errors reported synchronously to the caller of a command.
///
/// These are separate from the [`ErrorCode`](klarna_checkout_core::types::ErrorCode) taxonomy,
/// which describes button lifecycle failures delivered as events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// A required argument is missing or has the wrong type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// No active button is registered under the identifier.
    #[error("No button registered for view {0}")]
    ViewNotFound(i64),

    /// The native SDK cannot apply the command to a constructed button.
    #[error(
        "{command} is not supported by the native button; dispose and recreate the button instead"
    )]
    NotSupported { view_id: i64, command: &'static str },

    /// The method name is not part of the plugin surface.
    #[error("Unknown method '{0}'")]
    UnknownMethod(String),
}

impl CommandError {
    /// The stable wire code of the error.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            CommandError::ViewNotFound(_) => "VIEW_NOT_FOUND",
            CommandError::NotSupported { .. } => "NOT_SUPPORTED",
            CommandError::UnknownMethod(_) => "NOT_IMPLEMENTED",
        }
    }

    /// Structured details attached to the error response, if any.
    pub fn details(&self) -> Option<AnyJson> {
        match self {
            CommandError::ViewNotFound(view_id) => Some(json!({ "viewId": view_id })),
            CommandError::NotSupported { view_id, command } => {
                Some(json!({ "viewId": view_id, "command": command }))
            }
            CommandError::InvalidArguments(_) | CommandError::UnknownMethod(_) => None,
        }
    }
}
