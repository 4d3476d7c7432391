//! Session configuration: the payment authorization context the button operates in.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::{
    errors::{Result, ValidationError},
    types::{ConfigMap, MinorUnits},
};

/// Which session variant a configuration asks for.
///
/// Anything other than a case-insensitive `"serverSide"`, including an absent key or a typo,
/// selects [`SessionType::ClientSide`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SessionType {
    ServerSide,
    #[default]
    ClientSide,
}

/// A session anchored by a server-issued client token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSideSession {
    pub client_token: String,
    pub auto_finalize: bool,
    pub collect_shipping_address: bool,
    pub session_data: Option<String>,
}

/// A session anchored by a client identifier plus inline purchase data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSideSession {
    pub client_id: String,
    /// JSON-encoded [`SessionData`], or empty when no purchase data was configured.
    pub session_data: String,
    pub auto_finalize: bool,
    pub collect_shipping_address: bool,
}

/// Session configuration. Exactly one variant is active per button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "sessionType", rename_all = "camelCase")]
pub enum SessionOptions {
    ServerSide(ServerSideSession),
    ClientSide(ClientSideSession),
}

impl SessionOptions {
    /// Reads the session keys.
    ///
    /// Fails with a fatal `invalidConfiguration` error when the identity credential of the
    /// selected variant (`clientToken` or `clientId`) is missing or blank.
    pub fn from_config(config: ConfigMap<'_>) -> std::result::Result<Self, ValidationError> {
        let collect_shipping_address = config.bool("collectShippingAddress").unwrap_or(false);

        match config.enum_or_default::<SessionType>("sessionType") {
            SessionType::ServerSide => {
                let client_token = config.non_blank_str("clientToken").ok_or_else(|| {
                    ValidationError::fatal("Missing client token for server-side session")
                })?;

                Ok(SessionOptions::ServerSide(ServerSideSession {
                    client_token: client_token.to_string(),
                    auto_finalize: true,
                    collect_shipping_address,
                    session_data: config.str("sessionData").map(str::to_string),
                }))
            }
            SessionType::ClientSide => {
                let client_id = config.non_blank_str("clientId").ok_or_else(|| {
                    ValidationError::fatal("Missing client ID for client-side session")
                })?;

                Ok(SessionOptions::ClientSide(ClientSideSession {
                    client_id: client_id.to_string(),
                    session_data: SessionData::from_config(config).encode()?,
                    auto_finalize: true,
                    collect_shipping_address,
                }))
            }
        }
    }

    pub fn session_type(&self) -> SessionType {
        match self {
            SessionOptions::ServerSide(_) => SessionType::ServerSide,
            SessionOptions::ClientSide(_) => SessionType::ClientSide,
        }
    }

    pub fn as_server_side(&self) -> Option<&ServerSideSession> {
        match self {
            SessionOptions::ServerSide(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_client_side(&self) -> Option<&ClientSideSession> {
        match self {
            SessionOptions::ClientSide(s) => Some(s),
            _ => None,
        }
    }
}

/// Inline purchase data of a client-side session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_amount: Option<MinorUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_currency: Option<String>,
}

impl SessionData {
    /// Reads `amount` (decimal, major units) and `currency`.
    pub fn from_config(config: ConfigMap<'_>) -> Self {
        let purchase_amount = config.f64("amount").and_then(|amount| {
            let minor = MinorUnits::from_major(amount);
            if minor.is_none() {
                #[cfg(feature = "tracing")]
                tracing::warn!("Amount {amount} cannot be expressed in minor units; omitting it");
            }
            minor
        });

        SessionData {
            purchase_amount,
            purchase_currency: config.str("currency").map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.purchase_amount.is_none() && self.purchase_currency.is_none()
    }

    /// Encodes the data as a JSON object string, or an empty string when there is nothing to send.
    pub fn encode(&self) -> Result<String> {
        if self.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::ErrorCode;

    fn session_of(raw: serde_json::Value) -> std::result::Result<SessionOptions, ValidationError> {
        SessionOptions::from_config(ConfigMap::from_json(&raw).unwrap())
    }

    #[test]
    fn test_server_side_session() {
        let session = session_of(json!({
            "sessionType": "serverSide",
            "clientToken": "eyJhbGciOi.token",
            "collectShippingAddress": true,
        }))
        .unwrap();

        assert_eq!(
            session,
            SessionOptions::ServerSide(ServerSideSession {
                client_token: "eyJhbGciOi.token".to_string(),
                auto_finalize: true,
                collect_shipping_address: true,
                session_data: None,
            })
        );
    }

    #[test]
    fn test_server_side_is_case_insensitive() {
        let session = session_of(json!({
            "sessionType": "SERVERSIDE",
            "clientToken": "token",
            "sessionData": "{\"order\":1}",
        }))
        .unwrap();

        let server = session.as_server_side().unwrap();
        assert_eq!(server.session_data.as_deref(), Some("{\"order\":1}"));
        assert!(!server.collect_shipping_address);
    }

    #[test]
    fn test_missing_client_token_is_fatal() {
        for raw in [
            json!({ "sessionType": "serverSide" }),
            json!({ "sessionType": "serverSide", "clientToken": "   " }),
            json!({ "sessionType": "serverSide", "clientToken": 12 }),
            json!({ "sessionType": "serverSide", "clientId": "only-a-client-id" }),
        ] {
            let err = session_of(raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidConfiguration);
            assert!(err.is_fatal);
        }
    }

    #[test]
    fn test_unknown_session_type_is_client_side() {
        let err = session_of(json!({ "sessionType": "serverSidee", "clientToken": "t" }))
            .unwrap_err();
        assert!(err.is_fatal);
        assert_eq!(err.message, "Missing client ID for client-side session");

        let session = session_of(json!({ "sessionType": "server", "clientId": "id" })).unwrap();
        assert_eq!(session.session_type(), SessionType::ClientSide);
    }

    #[test]
    fn test_client_side_session_data() {
        let session = session_of(json!({
            "clientId": "client-id",
            "amount": 12.34,
            "currency": "USD",
        }))
        .unwrap();

        let client = session.as_client_side().unwrap();
        assert_eq!(
            client.session_data,
            r#"{"purchase_amount":1234,"purchase_currency":"USD"}"#
        );
        assert!(client.auto_finalize);
        assert!(!client.collect_shipping_address);
    }

    #[test]
    fn test_client_side_partial_session_data() {
        let amount_only = session_of(json!({ "clientId": "id", "amount": 5 })).unwrap();
        assert_eq!(
            amount_only.as_client_side().unwrap().session_data,
            r#"{"purchase_amount":500}"#
        );

        let currency_only = session_of(json!({ "clientId": "id", "currency": "SEK" })).unwrap();
        assert_eq!(
            currency_only.as_client_side().unwrap().session_data,
            r#"{"purchase_currency":"SEK"}"#
        );

        let neither = session_of(json!({ "clientId": "id" })).unwrap();
        assert_eq!(neither.as_client_side().unwrap().session_data, "");
    }

    #[test]
    fn test_missing_client_id_is_fatal() {
        let err = session_of(json!({ "clientId": "", "amount": 10.0 })).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
        assert!(err.is_fatal);
    }
}
