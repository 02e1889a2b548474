//! Transaction display formatting
//!
//! Formats receipts and history rows for line-based output.

use crate::i18n::{TextKey, TextProvider};
use crate::models::{TransactionKind, TransactionRecord};
use crate::services::Receipt;

/// Confirmation line for a committed operation
///
/// `"10.50€ deposited. New balance: 10.50€"`
pub fn format_receipt(receipt: &Receipt, texts: &impl TextProvider, currency: &str) -> String {
    let verb = match receipt.kind {
        TransactionKind::Deposit => texts.text(TextKey::Deposited),
        TransactionKind::Withdraw => texts.text(TextKey::Withdrawn),
    };

    format!(
        "{} {} {} {}",
        receipt.amount.format_with_symbol(currency),
        verb,
        texts.text(TextKey::NewBalance),
        receipt.new_balance.format_with_symbol(currency)
    )
}

/// A single history row: timestamp, amount, resulting balance
pub fn format_record_row(record: &TransactionRecord, currency: &str) -> String {
    format!(
        "{}  {:>12}  → {:>12}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.amount.format_with_symbol(currency),
        record.new_balance.format_with_symbol(currency)
    )
}

/// Heading for a log of the given kind
pub fn history_title(kind: TransactionKind, texts: &impl TextProvider) -> &'static str {
    match kind {
        TransactionKind::Deposit => texts.text(TextKey::RecentDeposits),
        TransactionKind::Withdraw => texts.text(TextKey::RecentWithdrawals),
    }
}

/// Format a log section, `None` meaning the log was never written
pub fn format_history(
    kind: TransactionKind,
    records: Option<&[TransactionRecord]>,
    texts: &impl TextProvider,
    currency: &str,
) -> String {
    let title = history_title(kind, texts);
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.chars().count().max(40)));
    output.push('\n');

    match records {
        Some(records) if !records.is_empty() => {
            for record in records {
                output.push_str(&format_record_row(record, currency));
                output.push('\n');
            }
        }
        _ => {
            output.push_str(texts.text(TextKey::NoTransactions));
            output.push('\n');
        }
    }

    output
}
