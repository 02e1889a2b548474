//! Path management for the piggy bank
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` on the command line (handled by the caller)
//! 2. `PIGGYBANK_DATA_DIR` environment variable (if set)
//! 3. The platform config directory (`~/.config/piggybank` on Linux,
//!    `~/Library/Application Support/piggybank` on macOS,
//!    `%APPDATA%\piggybank` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PiggyError;
use crate::models::TransactionKind;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "PIGGYBANK_DATA_DIR";

/// Manages all paths used by the piggy bank
#[derive(Debug, Clone)]
pub struct PiggyPaths {
    /// Directory holding every persisted file
    base_dir: PathBuf,
}

impl PiggyPaths {
    /// Resolve the data directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PiggyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PiggyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Plain-text file holding the balance
    pub fn balance_file(&self) -> PathBuf {
        self.base_dir.join("balance.txt")
    }

    /// JSON file holding the user preferences
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// JSON log of deposits
    pub fn deposits_file(&self) -> PathBuf {
        self.base_dir.join("deposits.json")
    }

    /// JSON log of withdrawals
    pub fn withdrawals_file(&self) -> PathBuf {
        self.base_dir.join("withdrawals.json")
    }

    /// Log file for a transaction kind
    pub fn log_file(&self, kind: TransactionKind) -> PathBuf {
        match kind {
            TransactionKind::Deposit => self.deposits_file(),
            TransactionKind::Withdraw => self.withdrawals_file(),
        }
    }

    /// Diagnostic trace output
    pub fn trace_file(&self) -> PathBuf {
        self.base_dir.join("piggybank.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), PiggyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PiggyError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, PiggyError> {
    ProjectDirs::from("", "", "piggybank")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PiggyError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PiggyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.balance_file(), temp_dir.path().join("balance.txt"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
    }

    #[test]
    fn test_log_file_per_kind() {
        let paths = PiggyPaths::with_base_dir(PathBuf::from("/data"));

        assert_eq!(
            paths.log_file(TransactionKind::Deposit),
            PathBuf::from("/data/deposits.json")
        );
        assert_eq!(
            paths.log_file(TransactionKind::Withdraw),
            PathBuf::from("/data/withdrawals.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("piggybank");
        let paths = PiggyPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
