//! Transaction log repository for JSON storage
//!
//! Each log is a JSON array of [`TransactionRecord`]s in write order. An
//! append reads the whole array, pushes one record and rewrites the file.

use std::path::PathBuf;

use crate::error::PiggyResult;
use crate::models::{Amount, TransactionKind, TransactionRecord};

use super::file_io::{load_json_or_default, read_json, write_json_atomic};

/// Append-only log of one transaction kind
pub struct TransactionLog {
    kind: TransactionKind,
    path: PathBuf,
}

impl TransactionLog {
    pub fn new(kind: TransactionKind, path: PathBuf) -> Self {
        Self { kind, path }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Append a record stamped with the current time
    ///
    /// A missing or corrupt log is replaced by a fresh one holding only the
    /// new record.
    pub fn append(&self, amount: Amount, new_balance: Amount) -> PiggyResult<TransactionRecord> {
        let mut records: Vec<TransactionRecord> = load_json_or_default(&self.path).into_inner();

        let record = TransactionRecord::new(amount, new_balance);
        records.push(record.clone());
        write_json_atomic(&self.path, &records)?;

        tracing::debug!(kind = %self.kind, count = records.len(), "log appended");
        Ok(record)
    }

    /// The last `limit` records in write order
    ///
    /// Returns `Ok(None)` when the log has never been written and
    /// `PersistenceCorrupt` when it exists but cannot be parsed.
    pub fn recent(&self, limit: usize) -> PiggyResult<Option<Vec<TransactionRecord>>> {
        let Some(records) = read_json::<Vec<TransactionRecord>, _>(&self.path)? else {
            return Ok(None);
        };

        let start = records.len().saturating_sub(limit);
        Ok(Some(records[start..].to_vec()))
    }

    /// Every record in write order, empty if the log does not exist
    pub fn all(&self) -> PiggyResult<Vec<TransactionRecord>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }
}
