//! The boundary to the native Express Checkout SDK.
//!
//! The SDK is a black box: it is handed validated [`ButtonOptions`] plus a [`ButtonDelegate`]
//! through a [`NativeButtonFactory`], and observed only through the delegate's callbacks.

use std::sync::{Arc, Weak};

use crate::{
    events::{AuthorizedData, ErrorData},
    normalizer::normalize,
    options::ButtonOptions,
    types::{AnyJson, ErrorCode},
};

/// Authorization result as reported by the native button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationResponse {
    pub approved: bool,
    pub session_id: Option<String>,
    pub authorization_token: Option<String>,
    /// The collected address, JSON-encoded by the SDK.
    pub collected_shipping_address: Option<String>,
    pub finalize_required: Option<bool>,
}

impl From<AuthorizationResponse> for AuthorizedData {
    fn from(response: AuthorizationResponse) -> Self {
        // Forwarded only when it decodes to a JSON object.
        let shipping_address = response
            .collected_shipping_address
            .as_deref()
            .and_then(|raw| serde_json::from_str::<AnyJson>(raw).ok())
            .filter(AnyJson::is_object);

        AuthorizedData {
            approved: response.approved,
            session_id: response.session_id.unwrap_or_default(),
            authorization_token: response.authorization_token,
            shipping_address,
            finalize_required: response.finalize_required,
        }
    }
}

/// An error as reported by the native SDK: an opaque name, a message and a fatal flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    pub name: String,
    pub message: String,
    pub is_fatal: bool,
    pub debug_description: Option<String>,
}

impl NativeError {
    /// The normalized code of this error.
    pub fn code(&self) -> ErrorCode {
        normalize(&self.name)
    }
}

impl From<NativeError> for ErrorData {
    fn from(error: NativeError) -> Self {
        ErrorData {
            code: error.code(),
            message: error.message,
            is_fatal: error.is_fatal,
            debug_message: error.debug_description,
        }
    }
}

/// Callbacks the native button reports through.
///
/// Callbacks may arrive on any thread.
pub trait ButtonDelegate: Send + Sync {
    fn on_authorized(&self, response: AuthorizationResponse);

    fn on_error(&self, error: NativeError);
}

/// Forwards to the delegate while it is alive; drops callbacks afterwards.
impl<T: ButtonDelegate> ButtonDelegate for Weak<T> {
    fn on_authorized(&self, response: AuthorizationResponse) {
        if let Some(delegate) = self.upgrade() {
            delegate.on_authorized(response);
        }
    }

    fn on_error(&self, error: NativeError) {
        if let Some(delegate) = self.upgrade() {
            delegate.on_error(error);
        }
    }
}

/// A constructed native button instance.
pub trait NativeButton: Send + 'static {
    /// Releases native resources. Called once, when the owning button is disposed.
    fn release(&mut self) {}
}

/// Constructs native buttons from validated options.
pub trait NativeButtonFactory: Send + Sync {
    type Button: NativeButton;
    type Error: std::error::Error;

    fn create(
        &self,
        options: &ButtonOptions,
        delegate: Arc<dyn ButtonDelegate>,
    ) -> Result<Self::Button, Self::Error>;
}
