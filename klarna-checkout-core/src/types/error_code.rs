//! The closed error code taxonomy carried by `error` events.

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

/// The closed set of error codes delivered to the application layer in `error` events.
///
/// Native SDK errors are mapped onto this set by [`normalize`](crate::normalizer::normalize).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ErrorCode {
    InvalidConfiguration,
    InvalidClientId,
    AuthorizationFailed,
    AlreadyInProgress,
    ButtonRenderFailed,
    NetworkError,
    SessionError,
    SessionExpired,
    InvalidSession,
    TokenError,
    TokenExpired,
    InvalidToken,
    Cancelled,
    Timeout,
    ServerError,
    ClientError,
    PaymentError,
    InitializationError,
    NotSupported,
    Unknown,
}

impl ErrorCode {
    /// The wire spelling, e.g. `"invalidClientId"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
