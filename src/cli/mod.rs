//! CLI command handlers
//!
//! This module contains the line-based front ends: the interactive menu
//! selected by `--cli` and the one-shot ledger subcommands.

pub mod interactive;
pub mod ledger;

pub use interactive::run_interactive;
pub use ledger::{handle_ledger_command, HistoryKind, LedgerCommands};
