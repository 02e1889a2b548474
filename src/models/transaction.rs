//! Transaction record model
//!
//! A record captures one completed deposit or withdrawal. Records are written
//! once and never edited.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::Amount;

/// Which log a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Deposit, TransactionKind::Withdraw];
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdraw => write!(f, "withdrawal"),
        }
    }
}

/// One entry in a transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Amount moved, always as entered (not signed by kind)
    pub amount: Amount,

    /// Balance after the operation
    pub new_balance: Amount,

    /// When the operation was committed (RFC 3339)
    pub timestamp: DateTime<Local>,
}

impl TransactionRecord {
    /// Create a record stamped with the current time
    pub fn new(amount: Amount, new_balance: Amount) -> Self {
        Self {
            amount,
            new_balance,
            timestamp: Local::now(),
        }
    }
}
