//! Core data models for the piggy bank
//!
//! The domain is small: an amount type shared by the balance and the
//! transaction logs, and the record written for every committed operation.

pub mod amount;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use transaction::{TransactionKind, TransactionRecord};
