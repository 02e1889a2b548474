//! Settings store
//!
//! Loads and saves `settings.json`. A missing or corrupt file yields the
//! default settings; a partial file keeps its keys and defaults the rest.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::PiggyResult;

use super::file_io::{load_json_or_default, write_json_atomic, LoadOutcome};

/// Persists user preferences
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> LoadOutcome<Settings> {
        load_json_or_default(&self.path)
    }

    /// Overwrite the stored settings wholesale
    pub fn save(&self, settings: &Settings) -> PiggyResult<()> {
        write_json_atomic(&self.path, settings)?;
        tracing::debug!(
            language = %settings.language,
            theme = %settings.theme,
            window_mode = %settings.window_mode,
            "settings saved"
        );
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Language, Theme, WindowMode};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SettingsStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::new(temp_dir.path().join("settings.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.load(), LoadOutcome::Missing(Settings::default()));
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = create_test_store();

        let settings = Settings {
            language: Language::En,
            currency: "CHF".to_string(),
            theme: Theme::Dark,
            window_mode: WindowMode::Maximized,
            ..Settings::default()
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load(), LoadOutcome::Loaded(settings));
    }

    #[test]
    fn test_missing_theme_defaults_to_light() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(
            store.path(),
            r#"{"language": "en", "currency": "$", "window_mode": "fullscreen"}"#,
        )
        .unwrap();

        let settings = store.load().into_inner();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.window_mode, WindowMode::Fullscreen);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "{ not json").unwrap();

        let outcome = store.load();
        assert!(outcome.fell_back());
        assert_eq!(outcome.into_inner(), Settings::default());
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), r#"{"language": "fr"}"#).unwrap();

        let outcome = store.load();
        assert!(outcome.fell_back());
        assert_eq!(outcome.value().language, Language::De);
    }
}
