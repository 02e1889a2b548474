//! Event handler for the TUI
//!
//! Routes keyboard events to app actions based on the current input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::TransactionKind;

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        // The next draw picks up the new size
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.input_mode {
        InputMode::Amount => handle_amount_key(app, key),
        InputMode::Currency => handle_currency_key(app, key),
    }
}

/// Keys while the amount field is active
fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter | KeyCode::F(2) => app.submit(TransactionKind::Deposit),
        KeyCode::F(3) => app.submit(TransactionKind::Withdraw),
        KeyCode::F(5) => app.toggle_theme(),
        KeyCode::F(6) => app.switch_language(),
        KeyCode::F(7) => app.begin_currency_edit(),
        KeyCode::F(8) => app.cycle_window_mode(),
        _ => handle_editing_key(app, key),
    }
}

/// Keys while the currency symbol is being edited
fn handle_currency_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.confirm_currency(),
        _ => handle_editing_key(app, key),
    }
}

/// Cursor movement and text editing shared by both fields
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    let input = app.active_input();

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
