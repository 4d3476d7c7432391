//! Events forwarded to the application layer.
//!
//! Every event serializes to `{ "type": "authorized" | "error", "data": { ... } }` with
//! camelCase data keys; optional fields are omitted when absent.

use bon::Builder;
use serde::Serialize;

use crate::{
    errors::{Result, ValidationError},
    types::{AnyJson, ErrorCode},
};

/// Payload of an `authorized` event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedData {
    pub approved: bool,
    /// Empty when the native SDK does not expose a session identifier.
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AnyJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalize_required: Option<bool>,
}

/// Payload of an `error` event.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorData {
    pub code: ErrorCode,
    #[builder(into)]
    pub message: String,
    pub is_fatal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub debug_message: Option<String>,
}

impl From<ValidationError> for ErrorData {
    fn from(err: ValidationError) -> Self {
        ErrorData {
            code: err.code,
            message: err.message,
            is_fatal: err.is_fatal,
            debug_message: None,
        }
    }
}

/// An event emitted by a button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ButtonEvent {
    Authorized(AuthorizedData),
    Error(ErrorData),
}

impl ButtonEvent {
    pub fn authorized(data: AuthorizedData) -> Self {
        ButtonEvent::Authorized(data)
    }

    pub fn error(data: impl Into<ErrorData>) -> Self {
        ButtonEvent::Error(data.into())
    }

    /// The `type` field of the serialized event.
    pub fn event_type(&self) -> &'static str {
        match self {
            ButtonEvent::Authorized(_) => "authorized",
            ButtonEvent::Error(_) => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ButtonEvent::Error(_))
    }

    pub fn as_authorized(&self) -> Option<&AuthorizedData> {
        match self {
            ButtonEvent::Authorized(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorData> {
        match self {
            ButtonEvent::Error(data) => Some(data),
            _ => None,
        }
    }

    /// Renders the event as the `{ type, data }` record sent over the event channel.
    pub fn to_json(&self) -> Result<AnyJson> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_authorized_envelope() {
        let event = ButtonEvent::authorized(AuthorizedData {
            approved: true,
            session_id: String::new(),
            authorization_token: Some("auth-token".to_string()),
            shipping_address: None,
            finalize_required: Some(false),
        });

        assert_eq!(event.event_type(), "authorized");
        assert_eq!(
            event.to_json().unwrap(),
            json!({
                "type": "authorized",
                "data": {
                    "approved": true,
                    "sessionId": "",
                    "authorizationToken": "auth-token",
                    "finalizeRequired": false,
                }
            })
        );
    }

    #[test]
    fn test_error_envelope() {
        let event = ButtonEvent::error(
            ErrorData::builder()
                .code(ErrorCode::NotSupported)
                .message("updateSession is not supported")
                .is_fatal(false)
                .build(),
        );

        assert!(event.is_error());
        assert_eq!(
            event.to_json().unwrap(),
            json!({
                "type": "error",
                "data": {
                    "code": "notSupported",
                    "message": "updateSession is not supported",
                    "isFatal": false,
                }
            })
        );
    }

    #[test]
    fn test_validation_error_into_event() {
        let event = ButtonEvent::error(ValidationError::fatal("Missing client ID"));
        let data = event.as_error().unwrap();

        assert_eq!(data.code, ErrorCode::InvalidConfiguration);
        assert_eq!(data.message, "Missing client ID");
        assert!(data.is_fatal);
        assert_eq!(data.debug_message, None);
    }
}
