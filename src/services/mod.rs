//! Service layer for the piggy bank
//!
//! Services sit between the front ends and storage. They own the in-memory
//! state (balance, settings) and decide when it is written.

pub mod ledger;
pub mod preferences;

pub use ledger::{LedgerService, Receipt};
pub use preferences::PreferencesService;
