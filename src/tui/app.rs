//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::{Language, Settings, WindowMode};
use crate::display::{error_message, format_receipt};
use crate::error::PiggyError;
use crate::i18n::TextKey;
use crate::models::{TransactionKind, TransactionRecord};
use crate::services::{LedgerService, PreferencesService};

use super::widgets::TextInput;

/// Which input field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Amount,
    Currency,
}

/// What the history panel for one log shows
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    /// The log has never been written
    Missing,
    Records(Vec<TransactionRecord>),
    /// The log exists but could not be parsed
    Unreadable,
}

/// Line shown under the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App<'a> {
    pub ledger: LedgerService<'a>,
    pub prefs: PreferencesService<'a>,

    /// Rows per log when history is visible
    pub history_limit: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    pub input_mode: InputMode,
    pub amount_input: TextInput,
    pub currency_input: TextInput,

    pub status: Option<StatusMessage>,

    pub deposits: HistoryState,
    pub withdrawals: HistoryState,
}

impl<'a> App<'a> {
    pub fn new(
        ledger: LedgerService<'a>,
        prefs: PreferencesService<'a>,
        history_limit: usize,
    ) -> Self {
        let mut app = Self {
            ledger,
            prefs,
            history_limit,
            should_quit: false,
            input_mode: InputMode::default(),
            amount_input: TextInput::new(),
            currency_input: TextInput::new(),
            status: None,
            deposits: HistoryState::Missing,
            withdrawals: HistoryState::Missing,
        };
        app.refresh_history();
        app
    }

    pub fn settings(&self) -> &Settings {
        self.prefs.settings()
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        self.prefs.text(key)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Input field currently being edited
    pub fn active_input(&mut self) -> &mut TextInput {
        match self.input_mode {
            InputMode::Amount => &mut self.amount_input,
            InputMode::Currency => &mut self.currency_input,
        }
    }

    /// Deposit or withdraw the amount in the input field
    pub fn submit(&mut self, kind: TransactionKind) {
        let input = self.amount_input.value().to_string();

        match self.ledger.apply(kind, &input) {
            Ok(receipt) => {
                let text = format_receipt(&receipt, &self.prefs.language(), self.prefs.currency());
                self.set_status(text);
            }
            Err(err) => self.set_error(&err),
        }

        self.amount_input.clear();
        self.refresh_history();
    }

    pub fn toggle_theme(&mut self) {
        let result = self.prefs.toggle_theme();
        self.report(result);
    }

    /// Switch to the other language
    pub fn switch_language(&mut self) {
        let next = self.prefs.language().next();
        self.set_language(next);
    }

    pub fn set_language(&mut self, language: Language) {
        let result = self.prefs.set_language(language);
        self.report(result);
    }

    pub fn cycle_window_mode(&mut self) {
        let next = self.settings().window_mode.next();
        self.set_window_mode(next);
    }

    pub fn set_window_mode(&mut self, mode: WindowMode) {
        let result = self.prefs.set_window_mode(mode);
        self.report(result);
        if mode.shows_history() {
            self.refresh_history();
        }
    }

    /// Start editing the currency symbol
    pub fn begin_currency_edit(&mut self) {
        self.currency_input = TextInput::new().content(self.prefs.currency());
        self.input_mode = InputMode::Currency;
    }

    /// Apply the edited currency symbol
    pub fn confirm_currency(&mut self) {
        let symbol = self.currency_input.value().to_string();
        let result = self.prefs.set_currency(&symbol).map(|_| ());
        self.report(result);
        self.input_mode = InputMode::Amount;
    }

    pub fn cancel_edit(&mut self) {
        self.currency_input.clear();
        self.input_mode = InputMode::Amount;
    }

    /// Re-read the recent records of both logs
    pub fn refresh_history(&mut self) {
        self.deposits = self.load_history(TransactionKind::Deposit);
        self.withdrawals = self.load_history(TransactionKind::Withdraw);
    }

    pub fn history(&self, kind: TransactionKind) -> &HistoryState {
        match kind {
            TransactionKind::Deposit => &self.deposits,
            TransactionKind::Withdraw => &self.withdrawals,
        }
    }

    /// Persist settings and balance before exit
    pub fn shutdown(&self) -> Result<(), PiggyError> {
        self.prefs.save()?;
        self.ledger.flush()
    }

    fn load_history(&self, kind: TransactionKind) -> HistoryState {
        match self.ledger.recent(kind, self.history_limit) {
            Ok(Some(records)) => HistoryState::Records(records),
            Ok(None) => HistoryState::Missing,
            Err(err) => {
                tracing::warn!(%kind, error = %err, "history unreadable");
                HistoryState::Unreadable
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, err: &PiggyError) {
        self.status = Some(StatusMessage {
            text: error_message(err, &self.prefs.language()),
            is_error: true,
        });
    }

    fn report(&mut self, result: Result<(), PiggyError>) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => self.set_error(&err),
        }
    }
}
