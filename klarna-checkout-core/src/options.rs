//! The Configuration Translator.
//!
//! [`translate`] turns the untyped configuration map handed over by the application layer into
//! validated [`ButtonOptions`]. Only a missing identity credential fails the translation;
//! unrecognized style and environment values silently fall back to their defaults.

use bon::Builder;
use serde::Serialize;

use crate::{
    errors::ValidationError,
    types::{AnyJson, ConfigMap, EnvironmentConfiguration, SessionOptions, StyleConfiguration},
};

/// Everything the native SDK needs to construct one button.
///
/// Built once per button and never mutated afterwards: the native SDK cannot reconfigure a
/// constructed button, so changing any of these requires a new button.
///
/// ```
/// use klarna_checkout_core::{options::translate, types::{ButtonShape, Environment}};
///
/// let config = serde_json::json!({
///     "clientId": "klarna-client-id",
///     "amount": 12.34,
///     "currency": "USD",
///     "shape": "pill",
///     "environment": "playground",
/// });
///
/// let options = translate(Some(&config)).unwrap();
/// assert_eq!(options.style.shape, ButtonShape::Pill);
/// assert_eq!(options.environment.environment, Environment::Playground);
/// assert_eq!(
///     options.session.as_client_side().unwrap().session_data,
///     r#"{"purchase_amount":1234,"purchase_currency":"USD"}"#
/// );
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonOptions {
    pub session: SessionOptions,
    #[builder(default)]
    pub style: StyleConfiguration,
    #[builder(default)]
    pub environment: EnvironmentConfiguration,
}

impl ButtonOptions {
    /// See [`translate`].
    pub fn from_config(config: Option<&AnyJson>) -> Result<Self, ValidationError> {
        let Some(config) = config.and_then(ConfigMap::from_json) else {
            return Err(ValidationError::non_fatal("Button configuration is missing"));
        };

        let session = SessionOptions::from_config(config)?;
        let style = StyleConfiguration::from_config(config);
        let environment = EnvironmentConfiguration::from_config(config);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Translated button configuration: session='{}', environment='{}', region='{}'",
            session.session_type(),
            environment.environment,
            environment.region
        );

        Ok(ButtonOptions {
            session,
            style,
            environment,
        })
    }
}

/// Translates an untyped configuration map into [`ButtonOptions`].
///
/// - `None`, or anything that is not a JSON object, fails with a non-fatal `invalidConfiguration`.
/// - A missing or blank `clientToken` (server-side) or `clientId` (client-side) fails with a
///   fatal `invalidConfiguration`.
/// - Every other field is optional and never causes a failure.
///
/// The function is pure: translating the same map twice yields equal options.
pub fn translate(config: Option<&AnyJson>) -> Result<ButtonOptions, ValidationError> {
    ButtonOptions::from_config(config)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{
        ButtonShape, ButtonStyle, ClientSideSession, Environment, ErrorCode, LoggingLevel,
        Region, Theme,
    };

    #[test]
    fn test_absent_config_is_non_fatal() {
        let err = translate(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
        assert!(!err.is_fatal);

        let err = translate(Some(&json!("clientId=abc"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
        assert!(!err.is_fatal);
    }

    #[test]
    fn test_missing_credentials_are_fatal() {
        let client_side = translate(Some(&json!({ "theme": "light" }))).unwrap_err();
        assert_eq!(client_side.code, ErrorCode::InvalidConfiguration);
        assert!(client_side.is_fatal);

        let server_side = translate(Some(&json!({ "sessionType": "serverSide" }))).unwrap_err();
        assert_eq!(server_side.code, ErrorCode::InvalidConfiguration);
        assert!(server_side.is_fatal);
    }

    #[test]
    fn test_unrecognized_style_never_fails() {
        let options = translate(Some(&json!({
            "clientId": "id",
            "theme": "neon",
            "shape": "triangle",
            "buttonStyle": "dotted",
            "environment": 3,
            "region": "MARS",
            "loggingLevel": "chatty",
        })))
        .unwrap();

        assert_eq!(options.style.theme, Theme::Dark);
        assert_eq!(options.style.shape, ButtonShape::RoundedRect);
        assert_eq!(options.style.style, ButtonStyle::Filled);
        assert_eq!(options.environment.environment, Environment::Production);
        assert_eq!(options.environment.region, Region::Na);
        assert_eq!(options.environment.logging_level, LoggingLevel::Off);
    }

    #[test]
    fn test_translation_is_idempotent() {
        let config = json!({
            "sessionType": "clientSide",
            "clientId": "id",
            "amount": 0.1,
            "currency": "EUR",
            "theme": "auto",
            "region": "EU",
            "locale": "de-DE",
        });

        assert_eq!(translate(Some(&config)), translate(Some(&config)));
    }

    #[test]
    fn test_full_client_side_translation() {
        let options = translate(Some(&json!({
            "clientId": "client-id",
            "amount": 0.1,
            "collectShippingAddress": true,
            "returnUrl": "myapp://return",
        })))
        .unwrap();

        let expected = ButtonOptions::builder()
            .session(SessionOptions::ClientSide(ClientSideSession {
                client_id: "client-id".to_string(),
                session_data: r#"{"purchase_amount":10}"#.to_string(),
                auto_finalize: true,
                collect_shipping_address: true,
            }))
            .environment(EnvironmentConfiguration {
                return_url: "myapp://return".to_string(),
                ..Default::default()
            })
            .build();

        assert_eq!(options, expected);
    }

    #[test]
    fn test_serialized_options() {
        let options = translate(Some(&json!({
            "sessionType": "serverSide",
            "clientToken": "token",
        })))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "session": {
                    "sessionType": "serverSide",
                    "clientToken": "token",
                    "autoFinalize": true,
                    "collectShippingAddress": false,
                    "sessionData": null,
                },
                "style": { "theme": "dark", "shape": "roundedRect", "style": "filled" },
                "environment": {
                    "environment": "production",
                    "region": "NA",
                    "locale": "en-US",
                    "loggingLevel": "off",
                    "returnUrl": "",
                },
            })
        );
    }
}
