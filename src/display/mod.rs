//! Display formatting for terminal output
//!
//! Shared by the text menu, the one-shot subcommands and the windowed front
//! end so every surface words things the same way.

pub mod transaction;

pub use transaction::{format_history, format_receipt, format_record_row, history_title};

use crate::error::PiggyError;
use crate::i18n::{TextKey, TextProvider};
use crate::models::Amount;

/// `"Current Balance: 12.25€"`
pub fn format_balance(balance: Amount, texts: &impl TextProvider, currency: &str) -> String {
    format!(
        "{} {}",
        texts.text(TextKey::CurrentBalance),
        balance.format_with_symbol(currency)
    )
}

/// Message shown to the user for a failed operation
pub fn error_message(err: &PiggyError, texts: &impl TextProvider) -> String {
    match err {
        PiggyError::InvalidAmount(_) => texts.text(TextKey::ErrorInvalid).to_string(),
        PiggyError::InsufficientFunds { .. } => {
            texts.text(TextKey::ErrorInsufficient).to_string()
        }
        other => format!("{} {}", texts.text(TextKey::ErrorStorage), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    #[test]
    fn test_format_balance() {
        assert_eq!(
            format_balance(Amount::new(12.25), &Language::En, "€"),
            "Current Balance: 12.25€"
        );
        assert_eq!(
            format_balance(Amount::zero(), &Language::De, "CHF"),
            "Aktueller Kontostand: 0.00CHF"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_message(&PiggyError::invalid_amount("x"), &Language::En),
            "Invalid input, please try again."
        );
        assert_eq!(
            error_message(
                &PiggyError::InsufficientFunds {
                    requested: 2.0,
                    available: 1.0
                },
                &Language::De
            ),
            "Fehler: Nicht genug Geld in der Spardose!"
        );
        assert!(error_message(&PiggyError::Io("disk full".into()), &Language::En)
            .starts_with("Failed to save:"));
    }
}
