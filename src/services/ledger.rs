//! Ledger service
//!
//! Applies deposits and withdrawals to the in-memory balance and persists
//! each committed change: first the balance file, then the matching log.

use crate::config::AppConfig;
use crate::error::{PiggyError, PiggyResult};
use crate::models::{Amount, TransactionKind, TransactionRecord};
use crate::storage::Storage;

/// Outcome of a committed deposit or withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub new_balance: Amount,
    pub record: TransactionRecord,
}

/// Service owning the running balance
pub struct LedgerService<'a> {
    storage: &'a Storage,
    balance: Amount,
    strict_amounts: bool,
}

impl<'a> LedgerService<'a> {
    /// Load the persisted balance and start a ledger on it
    pub fn open(storage: &'a Storage, config: &AppConfig) -> Self {
        Self {
            storage,
            balance: storage.balance.load().into_inner(),
            strict_amounts: config.strict_amounts,
        }
    }

    /// Current in-memory balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Add the parsed amount to the balance
    ///
    /// A negative deposit that would take the balance below zero fails with
    /// `InsufficientFunds`.
    pub fn deposit(&mut self, input: &str) -> PiggyResult<Receipt> {
        let amount = self.parse_amount(input)?;
        let new_balance = self.balance + amount;

        if new_balance.cents() < 0 {
            return Err(PiggyError::InsufficientFunds {
                requested: -amount.value(),
                available: self.balance.value(),
            });
        }

        self.commit(TransactionKind::Deposit, amount, settle(new_balance))
    }

    /// Take the parsed amount from the balance
    ///
    /// Amounts are compared in whole cents, so withdrawing exactly the
    /// displayed balance is allowed. Anything above it fails with
    /// `InsufficientFunds` and changes nothing.
    pub fn withdraw(&mut self, input: &str) -> PiggyResult<Receipt> {
        let amount = self.parse_amount(input)?;

        if amount.cents() > self.balance.cents() {
            return Err(PiggyError::InsufficientFunds {
                requested: amount.value(),
                available: self.balance.value(),
            });
        }

        self.commit(
            TransactionKind::Withdraw,
            amount,
            settle(self.balance - amount),
        )
    }

    /// Dispatch on the transaction kind
    pub fn apply(&mut self, kind: TransactionKind, input: &str) -> PiggyResult<Receipt> {
        match kind {
            TransactionKind::Deposit => self.deposit(input),
            TransactionKind::Withdraw => self.withdraw(input),
        }
    }

    /// Up to `limit` most recent records of one kind, `None` if never written
    pub fn recent(
        &self,
        kind: TransactionKind,
        limit: usize,
    ) -> PiggyResult<Option<Vec<TransactionRecord>>> {
        self.storage.log(kind).recent(limit)
    }

    /// Write the current balance, used at shutdown
    pub fn flush(&self) -> PiggyResult<()> {
        self.storage.balance.save(self.balance)
    }

    fn parse_amount(&self, input: &str) -> PiggyResult<Amount> {
        let amount = Amount::parse(input)?;

        if self.strict_amounts && !amount.is_positive() {
            return Err(PiggyError::invalid_amount(input));
        }

        Ok(amount)
    }

    // The balance changes only once it is on disk. No rollback after that:
    // a failed append leaves the new balance in place.
    fn commit(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        new_balance: Amount,
    ) -> PiggyResult<Receipt> {
        self.storage.balance.save(new_balance)?;
        self.balance = new_balance;
        let record = self.storage.log(kind).append(amount, new_balance)?;

        tracing::info!(%kind, %amount, balance = %new_balance, "transaction committed");

        Ok(Receipt {
            kind,
            amount,
            new_balance,
            record,
        })
    }
}

/// Snap sub-cent leftovers (and sub-cent negatives) to exactly zero
fn settle(balance: Amount) -> Amount {
    if balance.is_negative() || balance.cents() == 0 {
        Amount::zero()
    } else {
        balance
    }
}
