//! The Error Normalizer.
//!
//! Native SDK errors arrive with free-form names (`"NetworkSessionTimeout"`,
//! `"KlarnaErrorTokenExpired"`, ...). [`normalize`] maps such a name onto the closed
//! [`ErrorCode`] set by testing an ordered list of keyword rules against the lower-cased
//! name. The first rule with a matching keyword wins.
//!
//! Rule order is part of the contract: specific failures (`authorizationfailed`, `network`)
//! are tested before the broad `session`/`token` families, so `"NetworkSessionTimeout"` is a
//! network error rather than a session error.

use crate::types::ErrorCode;

enum Outcome {
    Always(ErrorCode),
    /// A family of errors refined by whether the name mentions expiry or invalidity.
    Family {
        expired: ErrorCode,
        invalid: ErrorCode,
        otherwise: ErrorCode,
    },
}

impl Outcome {
    fn resolve(&self, name: &str) -> ErrorCode {
        match self {
            Outcome::Always(code) => *code,
            Outcome::Family {
                expired,
                invalid,
                otherwise,
            } => {
                if name.contains("expired") {
                    *expired
                } else if name.contains("invalid") {
                    *invalid
                } else {
                    *otherwise
                }
            }
        }
    }
}

const RULES: &[(&[&str], Outcome)] = &[
    (&["invalidclientid"], Outcome::Always(ErrorCode::InvalidClientId)),
    (
        &["authorizationfailed", "authorization_failed"],
        Outcome::Always(ErrorCode::AuthorizationFailed),
    ),
    (&["alreadyinprogress"], Outcome::Always(ErrorCode::AlreadyInProgress)),
    (&["buttonrenderfailed"], Outcome::Always(ErrorCode::ButtonRenderFailed)),
    (&["network", "connection"], Outcome::Always(ErrorCode::NetworkError)),
    (
        &["invalidconfiguration", "invalid_configuration"],
        Outcome::Always(ErrorCode::InvalidConfiguration),
    ),
    (&["cancelled", "canceled"], Outcome::Always(ErrorCode::Cancelled)),
    (
        &["session"],
        Outcome::Family {
            expired: ErrorCode::SessionExpired,
            invalid: ErrorCode::InvalidSession,
            otherwise: ErrorCode::SessionError,
        },
    ),
    (
        &["token"],
        Outcome::Family {
            expired: ErrorCode::TokenExpired,
            invalid: ErrorCode::InvalidToken,
            otherwise: ErrorCode::TokenError,
        },
    ),
    (&["timeout", "timed out"], Outcome::Always(ErrorCode::Timeout)),
    (&["server", "5xx"], Outcome::Always(ErrorCode::ServerError)),
    (&["client", "4xx"], Outcome::Always(ErrorCode::ClientError)),
    (&["payment"], Outcome::Always(ErrorCode::PaymentError)),
];

/// Maps a native SDK error name onto an [`ErrorCode`].
///
/// ```
/// use klarna_checkout_core::{normalizer::normalize, types::ErrorCode};
///
/// assert_eq!(normalize("NetworkSessionTimeout"), ErrorCode::NetworkError);
/// assert_eq!(normalize("SessionExpiredError"), ErrorCode::SessionExpired);
/// assert_eq!(normalize("XyzFooBar"), ErrorCode::Unknown);
/// ```
pub fn normalize(native_error_name: &str) -> ErrorCode {
    let name = native_error_name.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(ErrorCode::Unknown, |(_, outcome)| outcome.resolve(&name))
}

impl ErrorCode {
    /// See [`normalize`].
    pub fn from_native_name(native_error_name: &str) -> Self {
        normalize(native_error_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_rules() {
        let cases = [
            ("KlarnaInvalidClientIdError", ErrorCode::InvalidClientId),
            ("AuthorizationFailed", ErrorCode::AuthorizationFailed),
            ("authorization_failed", ErrorCode::AuthorizationFailed),
            ("AlreadyInProgress", ErrorCode::AlreadyInProgress),
            ("ButtonRenderFailed", ErrorCode::ButtonRenderFailed),
            ("ConnectionLost", ErrorCode::NetworkError),
            ("InvalidConfiguration", ErrorCode::InvalidConfiguration),
            ("invalid_configuration", ErrorCode::InvalidConfiguration),
            ("UserCancelled", ErrorCode::Cancelled),
            ("PurchaseCanceled", ErrorCode::Cancelled),
            ("RequestTimeout", ErrorCode::Timeout),
            ("request timed out", ErrorCode::Timeout),
            ("InternalServerError", ErrorCode::ServerError),
            ("HTTP 5xx", ErrorCode::ServerError),
            ("HTTP 4xx", ErrorCode::ClientError),
            ("BadClientRequest", ErrorCode::ClientError),
            ("PaymentDeclined", ErrorCode::PaymentError),
        ];

        for (name, expected) in cases {
            assert_eq!(normalize(name), expected, "normalizing '{name}'");
        }
    }

    #[test]
    fn test_session_family() {
        assert_eq!(normalize("SessionExpiredError"), ErrorCode::SessionExpired);
        assert_eq!(normalize("InvalidSession"), ErrorCode::InvalidSession);
        assert_eq!(normalize("SessionError"), ErrorCode::SessionError);
    }

    #[test]
    fn test_token_family() {
        assert_eq!(normalize("TokenInvalidError"), ErrorCode::InvalidToken);
        assert_eq!(normalize("ClientTokenExpired"), ErrorCode::TokenExpired);
        assert_eq!(normalize("TokenError"), ErrorCode::TokenError);
    }

    #[test]
    fn test_rule_order() {
        // network precedes session and timeout
        assert_eq!(normalize("NetworkSessionTimeout"), ErrorCode::NetworkError);
        // invalidclientid precedes client
        assert_eq!(normalize("InvalidClientId"), ErrorCode::InvalidClientId);
        // cancelled precedes session
        assert_eq!(normalize("SessionCancelled"), ErrorCode::Cancelled);
        // session precedes token
        assert_eq!(normalize("SessionTokenExpired"), ErrorCode::SessionExpired);
        // token precedes client
        assert_eq!(normalize("ClientTokenMissing"), ErrorCode::TokenError);
        // timeout precedes server
        assert_eq!(normalize("ServerTimeout"), ErrorCode::Timeout);
        // server precedes payment
        assert_eq!(normalize("PaymentServerDown"), ErrorCode::ServerError);
    }

    #[test]
    fn test_unmatched_names() {
        assert_eq!(normalize("XyzFooBar"), ErrorCode::Unknown);
        assert_eq!(normalize(""), ErrorCode::Unknown);
    }

    #[test]
    fn test_from_native_name() {
        assert_eq!(
            ErrorCode::from_native_name("NETWORK_UNAVAILABLE"),
            ErrorCode::NetworkError
        );
    }
}
