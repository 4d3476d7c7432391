//! Environment, region, locale and logging configuration of the button.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::types::ConfigMap;

/// Payment provider environment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    #[default]
    #[strum(to_string = "production")]
    Production,
    /// Test environment. `sandbox` is accepted as an alias.
    #[strum(to_string = "playground", serialize = "sandbox")]
    Playground,
}

/// Payment provider region.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumString, Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Region {
    /// North America.
    #[default]
    Na,
    /// Europe.
    Eu,
    /// Oceania.
    Oc,
}

/// Verbosity of the native SDK's own logging.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum LoggingLevel {
    #[default]
    Off,
    Error,
    Verbose,
}

pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment configuration: `environment`, `region`, `locale`, `loggingLevel` and `returnUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfiguration {
    pub environment: Environment,
    pub region: Region,
    /// Passed through untouched.
    pub locale: String,
    pub logging_level: LoggingLevel,
    /// Passed through untouched; empty when not configured.
    pub return_url: String,
}

impl Default for EnvironmentConfiguration {
    fn default() -> Self {
        EnvironmentConfiguration {
            environment: Environment::default(),
            region: Region::default(),
            locale: DEFAULT_LOCALE.to_string(),
            logging_level: LoggingLevel::default(),
            return_url: String::new(),
        }
    }
}

impl EnvironmentConfiguration {
    /// Reads the environment keys. Never fails.
    pub fn from_config(config: ConfigMap<'_>) -> Self {
        EnvironmentConfiguration {
            environment: config.enum_or_default("environment"),
            region: config.enum_or_default("region"),
            locale: config.str("locale").unwrap_or(DEFAULT_LOCALE).to_string(),
            logging_level: config.enum_or_default("loggingLevel"),
            return_url: config.str("returnUrl").unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn env_of(raw: serde_json::Value) -> EnvironmentConfiguration {
        EnvironmentConfiguration::from_config(ConfigMap::from_json(&raw).unwrap())
    }

    #[test]
    fn test_defaults() {
        let env = env_of(json!({}));

        assert_eq!(env.environment, Environment::Production);
        assert_eq!(env.region, Region::Na);
        assert_eq!(env.locale, "en-US");
        assert_eq!(env.logging_level, LoggingLevel::Off);
        assert_eq!(env.return_url, "");
        assert_eq!(env, EnvironmentConfiguration::default());
    }

    #[test]
    fn test_environment_aliases() {
        assert_eq!(env_of(json!({ "environment": "Playground" })).environment, Environment::Playground);
        assert_eq!(env_of(json!({ "environment": "sandbox" })).environment, Environment::Playground);
        assert_eq!(env_of(json!({ "environment": "staging" })).environment, Environment::Production);
        assert_eq!(Environment::Playground.to_string(), "playground");
    }

    #[test]
    fn test_pass_through_fields() {
        let env = env_of(json!({
            "locale": "sv-SE",
            "returnUrl": "myapp://klarna-return",
            "region": "oc",
            "loggingLevel": "Verbose",
        }));

        assert_eq!(env.locale, "sv-SE");
        assert_eq!(env.return_url, "myapp://klarna-return");
        assert_eq!(env.region, Region::Oc);
        assert_eq!(env.logging_level, LoggingLevel::Verbose);
    }

    #[test]
    fn test_serialized_spellings() {
        assert_eq!(Region::Eu.to_string(), "EU");
        assert_eq!(
            serde_json::to_value(EnvironmentConfiguration::default()).unwrap(),
            json!({
                "environment": "production",
                "region": "NA",
                "locale": "en-US",
                "loggingLevel": "off",
                "returnUrl": "",
            })
        );
    }
}
