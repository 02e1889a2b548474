//! Preferences service
//!
//! Holds the loaded settings for the lifetime of a front end and writes them
//! back after every change.

use crate::config::{Language, Settings, WindowMode};
use crate::error::PiggyResult;
use crate::i18n::{TextKey, TextProvider};
use crate::storage::Storage;

/// Service for reading and changing user preferences
pub struct PreferencesService<'a> {
    storage: &'a Storage,
    settings: Settings,
}

impl<'a> PreferencesService<'a> {
    /// Load settings, falling back to defaults
    pub fn load(storage: &'a Storage) -> Self {
        let outcome = storage.settings.load();
        if let crate::storage::LoadOutcome::FellBackToDefault { reason, .. } = &outcome {
            tracing::warn!(%reason, "settings unreadable, using defaults");
        }

        Self {
            storage,
            settings: outcome.into_inner(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency
    }

    /// Translated string in the current language
    pub fn text(&self, key: TextKey) -> &'static str {
        self.settings.language.text(key)
    }

    pub fn toggle_theme(&mut self) -> PiggyResult<()> {
        self.settings.theme = self.settings.theme.toggled();
        self.save()
    }

    pub fn set_language(&mut self, language: Language) -> PiggyResult<()> {
        self.settings.language = language;
        self.save()
    }

    /// Change the currency symbol; blank input is ignored
    ///
    /// Returns whether the symbol changed.
    pub fn set_currency(&mut self, symbol: &str) -> PiggyResult<bool> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Ok(false);
        }

        self.settings.currency = symbol.to_string();
        self.save()?;
        Ok(true)
    }

    pub fn set_window_mode(&mut self, mode: WindowMode) -> PiggyResult<()> {
        self.settings.window_mode = mode;
        self.save()
    }

    /// Write the current settings
    pub fn save(&self) -> PiggyResult<()> {
        self.storage.settings.save(&self.settings)
    }
}
