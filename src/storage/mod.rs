//! Storage layer for the piggy bank
//!
//! Plain files in one data directory: the balance as text, settings and the
//! two transaction logs as JSON. Writes are atomic per file; there is no
//! locking and no transaction spanning several files.

pub mod balance;
pub mod file_io;
pub mod settings;
pub mod transactions;

pub use balance::BalanceStore;
pub use file_io::{load_json_or_default, read_json, write_json_atomic, LoadOutcome};
pub use settings::SettingsStore;
pub use transactions::TransactionLog;

use crate::config::paths::PiggyPaths;
use crate::error::PiggyError;
use crate::models::TransactionKind;

/// Main storage coordinator that provides access to every store
pub struct Storage {
    paths: PiggyPaths,
    pub balance: BalanceStore,
    pub settings: SettingsStore,
    pub deposits: TransactionLog,
    pub withdrawals: TransactionLog,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PiggyPaths) -> Result<Self, PiggyError> {
        paths.ensure_directories()?;

        Ok(Self {
            balance: BalanceStore::new(paths.balance_file()),
            settings: SettingsStore::new(paths.settings_file()),
            deposits: TransactionLog::new(
                TransactionKind::Deposit,
                paths.log_file(TransactionKind::Deposit),
            ),
            withdrawals: TransactionLog::new(
                TransactionKind::Withdraw,
                paths.log_file(TransactionKind::Withdraw),
            ),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PiggyPaths {
        &self.paths
    }

    /// The log holding records of the given kind
    pub fn log(&self, kind: TransactionKind) -> &TransactionLog {
        match kind {
            TransactionKind::Deposit => &self.deposits,
            TransactionKind::Withdraw => &self.withdrawals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("piggybank");
        let paths = PiggyPaths::with_base_dir(base.clone());
        let storage = Storage::new(paths).unwrap();

        assert!(base.exists());
        assert_eq!(storage.balance.path(), &base.join("balance.txt"));
        assert_eq!(storage.log(TransactionKind::Deposit).kind(), TransactionKind::Deposit);
        assert_eq!(
            storage.log(TransactionKind::Withdraw).path(),
            &base.join("withdrawals.json")
        );
    }
}
