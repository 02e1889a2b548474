//! One-shot ledger commands
//!
//! Non-interactive deposit, withdraw, balance and history commands for
//! scripting.

use clap::{Subcommand, ValueEnum};

use crate::display::{format_balance, format_history, format_receipt, history_title};
use crate::error::PiggyResult;
use crate::i18n::{TextKey, TextProvider};
use crate::models::TransactionKind;
use crate::services::{LedgerService, PreferencesService};

/// Which log(s) the history command shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum HistoryKind {
    #[default]
    All,
    Deposits,
    Withdrawals,
}

impl HistoryKind {
    fn kinds(&self) -> &'static [TransactionKind] {
        match self {
            Self::All => &TransactionKind::ALL,
            Self::Deposits => &[TransactionKind::Deposit],
            Self::Withdrawals => &[TransactionKind::Withdraw],
        }
    }
}

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Deposit money (accepts "10.50" or "10,50")
    Deposit {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Withdraw money
    Withdraw {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show the current balance
    Balance,
    /// Show recent transactions
    History {
        /// Which log to show
        #[arg(short, long, value_enum, default_value_t)]
        kind: HistoryKind,
        /// Number of records per log
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(
    ledger: &mut LedgerService,
    prefs: &PreferencesService,
    history_limit: usize,
    cmd: LedgerCommands,
) -> PiggyResult<()> {
    let language = prefs.language();

    match cmd {
        LedgerCommands::Deposit { amount } => {
            let receipt = ledger.deposit(&amount)?;
            println!("{}", format_receipt(&receipt, &language, prefs.currency()));
        }
        LedgerCommands::Withdraw { amount } => {
            let receipt = ledger.withdraw(&amount)?;
            println!("{}", format_receipt(&receipt, &language, prefs.currency()));
        }
        LedgerCommands::Balance => {
            println!(
                "{}",
                format_balance(ledger.balance(), &language, prefs.currency())
            );
        }
        LedgerCommands::History { kind, limit } => {
            let limit = limit.unwrap_or(history_limit);
            for (i, kind) in kind.kinds().iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let section = match ledger.recent(*kind, limit) {
                    Ok(records) => {
                        format_history(*kind, records.as_deref(), &language, prefs.currency())
                    }
                    Err(err) if err.is_corrupt() => {
                        tracing::warn!(%kind, error = %err, "history unreadable");
                        format!(
                            "{}\n{}\n",
                            history_title(*kind, &language),
                            language.text(TextKey::HistoryUnreadable)
                        )
                    }
                    Err(err) => return Err(err),
                };
                print!("{}", section);
            }
        }
    }

    Ok(())
}
