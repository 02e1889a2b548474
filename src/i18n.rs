//! User-facing strings in German and English
//!
//! Every string is addressed by a [`TextKey`]. Lookups are exhaustive
//! matches, so a key without a translation does not compile.

use crate::config::{Language, WindowMode};

/// Identifies one user-facing string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    Settings,
    ToggleTheme,
    Language,
    ChangeCurrency,
    Deposit,
    Withdraw,
    ShowBalance,
    Exit,
    CurrentBalance,
    ErrorInsufficient,
    ErrorInvalid,
    ErrorStorage,
    CurrencyPrompt,
    WindowMode,
    ModeNormal,
    ModeFullscreen,
    ModeMaximized,
    ModeMinimized,
    ChooseOption,
    DepositPrompt,
    WithdrawPrompt,
    Deposited,
    Withdrawn,
    NewBalance,
    Exiting,
    Amount,
    RecentDeposits,
    RecentWithdrawals,
    NoTransactions,
    HistoryUnreadable,
    Confirm,
    Cancel,
}

/// Source of translated strings
pub trait TextProvider {
    fn text(&self, key: TextKey) -> &'static str;

    /// Label for a window mode
    fn window_mode_label(&self, mode: WindowMode) -> &'static str {
        self.text(match mode {
            WindowMode::Normal => TextKey::ModeNormal,
            WindowMode::Fullscreen => TextKey::ModeFullscreen,
            WindowMode::Maximized => TextKey::ModeMaximized,
            WindowMode::Minimized => TextKey::ModeMinimized,
        })
    }
}

impl TextProvider for Language {
    fn text(&self, key: TextKey) -> &'static str {
        match self {
            Language::De => german(key),
            Language::En => english(key),
        }
    }
}

fn german(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Spardosen Manager",
        TextKey::Settings => "Einstellungen",
        TextKey::ToggleTheme => "Theme wechseln",
        TextKey::Language => "Sprache",
        TextKey::ChangeCurrency => "Währung ändern",
        TextKey::Deposit => "Geld einzahlen",
        TextKey::Withdraw => "Geld auszahlen",
        TextKey::ShowBalance => "Kontostand anzeigen",
        TextKey::Exit => "Beenden",
        TextKey::CurrentBalance => "Aktueller Kontostand:",
        TextKey::ErrorInsufficient => "Fehler: Nicht genug Geld in der Spardose!",
        TextKey::ErrorInvalid => "Ungültige Eingabe, bitte erneut versuchen.",
        TextKey::ErrorStorage => "Fehler beim Speichern:",
        TextKey::CurrencyPrompt => "Geben Sie das neue Währungssymbol ein:",
        TextKey::WindowMode => "Fenstermodus",
        TextKey::ModeNormal => "Normal",
        TextKey::ModeFullscreen => "Vollbild",
        TextKey::ModeMaximized => "Maximiert",
        TextKey::ModeMinimized => "Minimiert",
        TextKey::ChooseOption => "Wählen Sie eine Option:",
        TextKey::DepositPrompt => "Wie viel möchten Sie einzahlen?",
        TextKey::WithdrawPrompt => "Wie viel möchten Sie auszahlen?",
        TextKey::Deposited => "eingezahlt.",
        TextKey::Withdrawn => "ausgezahlt.",
        TextKey::NewBalance => "Neuer Kontostand:",
        TextKey::Exiting => "Programm wird beendet.",
        TextKey::Amount => "Betrag",
        TextKey::RecentDeposits => "Letzte Einzahlungen",
        TextKey::RecentWithdrawals => "Letzte Auszahlungen",
        TextKey::NoTransactions => "Keine Buchungen vorhanden.",
        TextKey::HistoryUnreadable => "Verlauf konnte nicht gelesen werden.",
        TextKey::Confirm => "Übernehmen",
        TextKey::Cancel => "Abbrechen",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Piggy Bank Manager",
        TextKey::Settings => "Settings",
        TextKey::ToggleTheme => "Toggle Theme",
        TextKey::Language => "Language",
        TextKey::ChangeCurrency => "Change Currency",
        TextKey::Deposit => "Deposit Money",
        TextKey::Withdraw => "Withdraw Money",
        TextKey::ShowBalance => "Show Balance",
        TextKey::Exit => "Exit",
        TextKey::CurrentBalance => "Current Balance:",
        TextKey::ErrorInsufficient => "Error: Not enough money in the piggy bank!",
        TextKey::ErrorInvalid => "Invalid input, please try again.",
        TextKey::ErrorStorage => "Failed to save:",
        TextKey::CurrencyPrompt => "Enter new currency symbol:",
        TextKey::WindowMode => "Window Mode",
        TextKey::ModeNormal => "Normal",
        TextKey::ModeFullscreen => "Fullscreen",
        TextKey::ModeMaximized => "Maximized",
        TextKey::ModeMinimized => "Minimized",
        TextKey::ChooseOption => "Choose an option:",
        TextKey::DepositPrompt => "How much do you want to deposit?",
        TextKey::WithdrawPrompt => "How much do you want to withdraw?",
        TextKey::Deposited => "deposited.",
        TextKey::Withdrawn => "withdrawn.",
        TextKey::NewBalance => "New balance:",
        TextKey::Exiting => "Exiting the program.",
        TextKey::Amount => "Amount",
        TextKey::RecentDeposits => "Recent deposits",
        TextKey::RecentWithdrawals => "Recent withdrawals",
        TextKey::NoTransactions => "No transactions yet.",
        TextKey::HistoryUnreadable => "History could not be read.",
        TextKey::Confirm => "Apply",
        TextKey::Cancel => "Cancel",
    }
}
