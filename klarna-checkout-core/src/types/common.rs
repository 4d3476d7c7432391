//! Miscellaneous common types used throughout the checkout bridge.

use std::str::FromStr;

/// Represents any JSON value.
///
/// The application layer hands button configuration and command arguments over as this type.
pub type AnyJson = serde_json::Value;

/// A read-only view over an untyped key/value map coming from the application layer.
///
/// A key holding a value of the wrong JSON type reads as absent, so a misplaced `"amount": "12"`
/// behaves exactly like a missing amount.
///
/// ```
/// use klarna_checkout_core::types::{ConfigMap, Theme};
///
/// let raw = serde_json::json!({
///     "clientId": "klarna-client-id",
///     "theme": "LIGHT",
///     "amount": "not a number",
/// });
/// let config = ConfigMap::from_json(&raw).unwrap();
///
/// assert_eq!(config.str("clientId"), Some("klarna-client-id"));
/// assert_eq!(config.f64("amount"), None);
/// assert_eq!(config.enum_or_default::<Theme>("theme"), Theme::Light);
/// assert_eq!(config.enum_or_default::<Theme>("missing"), Theme::Dark);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigMap<'a>(pub &'a serde_json::Map<String, AnyJson>);

impl<'a> ConfigMap<'a> {
    /// Returns `None` unless `value` is a JSON object.
    pub fn from_json(value: &'a AnyJson) -> Option<Self> {
        value.as_object().map(ConfigMap)
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.0.get(key).and_then(AnyJson::as_str)
    }

    /// A string value that is present and not made of whitespace only.
    pub fn non_blank_str(&self, key: &str) -> Option<&'a str> {
        self.str(key).filter(|s| !s.trim().is_empty())
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(AnyJson::as_f64)
    }

    pub fn i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(AnyJson::as_i64)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(AnyJson::as_bool)
    }

    /// Parses a string-valued enumeration, falling back to `T::default()` when the key is
    /// absent or holds an unrecognized value. Never fails.
    pub fn enum_or_default<T>(&self, key: &str) -> T
    where
        T: FromStr + Default,
    {
        let Some(raw) = self.str(key) else {
            return T::default();
        };

        raw.parse().unwrap_or_else(|_| {
            #[cfg(feature = "tracing")]
            tracing::debug!("Unrecognized value '{raw}' for '{key}'; using default");
            T::default()
        })
    }
}
