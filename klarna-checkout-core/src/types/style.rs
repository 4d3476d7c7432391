//! Visual configuration of the Express Checkout button.
//!
//! Every field parses case-insensitively and falls back to its default on unrecognized input.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::types::ConfigMap;

/// Color theme of the button.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follows the system appearance.
    Auto,
}

/// Outline shape of the button.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ButtonShape {
    Rectangle,
    Pill,
    #[default]
    RoundedRect,
}

/// Fill style of the button.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ButtonStyle {
    #[default]
    Filled,
    Outlined,
}

/// Button style configuration: `theme`, `shape` and `buttonStyle` keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfiguration {
    pub theme: Theme,
    pub shape: ButtonShape,
    pub style: ButtonStyle,
}

impl StyleConfiguration {
    /// Reads the style keys. Never fails.
    pub fn from_config(config: ConfigMap<'_>) -> Self {
        StyleConfiguration {
            theme: config.enum_or_default("theme"),
            shape: config.enum_or_default("shape"),
            style: config.enum_or_default("buttonStyle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn style_of(raw: serde_json::Value) -> StyleConfiguration {
        StyleConfiguration::from_config(ConfigMap::from_json(&raw).unwrap())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            style_of(json!({})),
            StyleConfiguration {
                theme: Theme::Dark,
                shape: ButtonShape::RoundedRect,
                style: ButtonStyle::Filled,
            }
        );
    }

    #[test]
    fn test_parses_each_field_independently() {
        let style = style_of(json!({
            "theme": "auto",
            "shape": "not-a-shape",
            "buttonStyle": "OUTLINED",
        }));

        assert_eq!(style.theme, Theme::Auto);
        assert_eq!(style.shape, ButtonShape::RoundedRect);
        assert_eq!(style.style, ButtonStyle::Outlined);
    }

    #[test]
    fn test_rounded_rect_spellings() {
        assert_eq!(style_of(json!({ "shape": "roundedRect" })).shape, ButtonShape::RoundedRect);
        assert_eq!(style_of(json!({ "shape": "roundedrect" })).shape, ButtonShape::RoundedRect);
        assert_eq!(style_of(json!({ "shape": "RECTANGLE" })).shape, ButtonShape::Rectangle);
    }

    #[test]
    fn test_serialized_spellings() {
        assert_eq!(ButtonShape::RoundedRect.to_string(), "roundedRect");
        assert_eq!(
            serde_json::to_value(StyleConfiguration::default()).unwrap(),
            json!({ "theme": "dark", "shape": "roundedRect", "style": "filled" })
        );
    }
}
