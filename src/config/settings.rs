//! User settings for the piggy bank
//!
//! Manages display and locale preferences: language, currency symbol,
//! colour theme and window mode. Persistence lives in
//! [`crate::storage::SettingsStore`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German (default)
    #[default]
    De,
    /// English
    En,
}

impl Language {
    /// Short code as stored in the settings file
    pub fn code(&self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Name of the language in itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::De => "Deutsch",
            Self::En => "English",
        }
    }

    /// The other supported language
    pub fn next(&self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// How much of the terminal the windowed front end occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Centred panel of fixed size
    #[default]
    Normal,
    /// Whole terminal, with history
    Fullscreen,
    /// Whole terminal, with history
    Maximized,
    /// A single status line
    Minimized,
}

impl WindowMode {
    pub const ALL: [WindowMode; 4] = [
        WindowMode::Normal,
        WindowMode::Fullscreen,
        WindowMode::Maximized,
        WindowMode::Minimized,
    ];

    /// Whether the recent transaction history is visible in this mode
    pub fn shows_history(&self) -> bool {
        matches!(self, Self::Fullscreen | Self::Maximized)
    }

    /// The following mode, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Fullscreen => "fullscreen",
            Self::Maximized => "maximized",
            Self::Minimized => "minimized",
        };
        f.write_str(s)
    }
}

/// User preferences
///
/// Every field carries a serde default so a partially written file merges
/// its present keys over the defaults. Keys this version does not know are
/// kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub window_mode: WindowMode,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            currency: default_currency(),
            theme: Theme::default(),
            window_mode: WindowMode::default(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::De);
        assert_eq!(settings.currency, "€");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.window_mode, WindowMode::Normal);
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"language": "en", "currency": "$"}"#).unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.window_mode, WindowMode::Normal);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let settings: Settings =
            serde_json::from_str(r#"{"theme": "dark", "font_size": 14}"#).unwrap();
        assert_eq!(settings.extra.get("font_size"), Some(&Value::from(14)));

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["font_size"], 14);
        assert_eq!(json["theme"], "dark");
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["language"], "de");
        assert_eq!(json["currency"], "€");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["window_mode"], "normal");
    }

    #[test]
    fn test_window_mode_cycle() {
        assert_eq!(WindowMode::Normal.next(), WindowMode::Fullscreen);
        assert_eq!(WindowMode::Minimized.next(), WindowMode::Normal);
        assert!(WindowMode::Maximized.shows_history());
        assert!(WindowMode::Fullscreen.shows_history());
        assert!(!WindowMode::Normal.shows_history());
        assert!(!WindowMode::Minimized.shows_history());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
