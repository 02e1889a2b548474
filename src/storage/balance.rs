//! Balance store
//!
//! Keeps the balance as a single plain-text number in `balance.txt`.

use std::path::PathBuf;

use crate::error::PiggyResult;
use crate::models::Amount;

use super::file_io::{write_text_atomic, LoadOutcome};

/// Persists the running balance
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the balance, treating a missing or unparsable file as zero
    pub fn load(&self) -> LoadOutcome<Amount> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return LoadOutcome::Missing(Amount::zero());
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "balance unreadable, using zero");
                return LoadOutcome::FellBackToDefault {
                    value: Amount::zero(),
                    reason: e.to_string(),
                };
            }
        };

        match Amount::from_plain(&contents) {
            Some(balance) => {
                tracing::debug!(%balance, "balance loaded");
                LoadOutcome::Loaded(balance)
            }
            None => {
                tracing::warn!(path = %self.path.display(), "balance not a number, using zero");
                LoadOutcome::FellBackToDefault {
                    value: Amount::zero(),
                    reason: format!("not a number: {:?}", contents.trim()),
                }
            }
        }
    }

    /// Overwrite the stored balance
    pub fn save(&self, balance: Amount) -> PiggyResult<()> {
        write_text_atomic(&self.path, &balance.plain())?;
        tracing::debug!(%balance, "balance saved");
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BalanceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BalanceStore::new(temp_dir.path().join("balance.txt"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_is_zero() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.load(), LoadOutcome::Missing(Amount::zero()));
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = create_test_store();

        for value in [12.25, 0.0, 0.1 + 0.2, 99999.99] {
            store.save(Amount::new(value)).unwrap();
            assert_eq!(store.load(), LoadOutcome::Loaded(Amount::new(value)));
        }
    }

    #[test]
    fn test_plain_text_format() {
        let (_temp_dir, store) = create_test_store();
        store.save(Amount::new(12.25)).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "12.25");
    }

    #[test]
    fn test_garbage_falls_back_to_zero() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "twelve euros").unwrap();

        let outcome = store.load();
        assert!(outcome.fell_back());
        assert_eq!(outcome.into_inner(), Amount::zero());
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "  42.5\n").unwrap();

        assert_eq!(store.load(), LoadOutcome::Loaded(Amount::new(42.5)));
    }
}
