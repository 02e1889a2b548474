//! Main panel view
//!
//! Shows the balance, the amount (or currency) input, the last status
//! message and the key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::format_balance;
use crate::i18n::{TextKey, TextProvider};
use crate::tui::app::{App, InputMode};
use crate::tui::theme::Palette;

/// Render the main panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: Palette) {
    let base = Style::default().fg(palette.text).bg(palette.background);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.text(TextKey::Title)))
        .style(base)
        .border_style(base.fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Balance
            Constraint::Length(2), // Input
            Constraint::Length(2), // Status
            Constraint::Min(0),    // Key hints
        ])
        .split(inner);

    let balance = format_balance(
        app.ledger.balance(),
        &app.prefs.language(),
        app.prefs.currency(),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            balance,
            base.add_modifier(Modifier::BOLD),
        )))
        .style(base),
        chunks[0],
    );

    let input_widget = match app.input_mode {
        InputMode::Amount => app
            .amount_input
            .widget(app.prefs.text(TextKey::Amount), palette),
        InputMode::Currency => app
            .currency_input
            .widget(app.prefs.text(TextKey::CurrencyPrompt), palette),
    };
    frame.render_widget(input_widget, chunks[1]);

    if let Some(status) = &app.status {
        let style = if status.is_error {
            base.fg(palette.error)
        } else {
            base.fg(palette.accent)
        };
        frame.render_widget(
            Paragraph::new(status.text.as_str())
                .style(style)
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }

    frame.render_widget(
        Paragraph::new(key_hints(app, palette))
            .style(base)
            .wrap(Wrap { trim: true }),
        chunks[3],
    );
}

fn key_hints(app: &App, palette: Palette) -> Vec<Line<'static>> {
    let language = app.prefs.language();
    let settings = app.settings();
    let key = Style::default().fg(palette.text).bg(palette.button);
    let label = Style::default().fg(palette.text).bg(palette.background);

    let hint = |k: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!(" {} ", k), key),
            Span::styled(format!(" {}", text), label),
        ])
    };

    if app.input_mode == InputMode::Currency {
        return vec![
            hint("Enter", language.text(TextKey::Confirm).to_string()),
            hint("Esc", language.text(TextKey::Cancel).to_string()),
        ];
    }

    vec![
        hint("Enter/F2", language.text(TextKey::Deposit).to_string()),
        hint("F3", language.text(TextKey::Withdraw).to_string()),
        hint("F5", language.text(TextKey::ToggleTheme).to_string()),
        hint(
            "F6",
            format!(
                "{}: {}",
                language.text(TextKey::Language),
                language.native_name()
            ),
        ),
        hint("F7", language.text(TextKey::ChangeCurrency).to_string()),
        hint(
            "F8",
            format!(
                "{}: {}",
                language.text(TextKey::WindowMode),
                language.window_mode_label(settings.window_mode)
            ),
        ),
        hint("Esc", language.text(TextKey::Exit).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Language, PiggyPaths, Theme};
    use crate::services::{LedgerService, PreferencesService};
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_currency_hints_are_localized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PiggyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let config = AppConfig::new(paths);
        let mut app = App::new(
            LedgerService::open(&storage, &config),
            PreferencesService::load(&storage),
            config.history_limit,
        );
        let palette = Palette::for_theme(Theme::Light);

        app.begin_currency_edit();
        let german: Vec<String> = key_hints(&app, palette).iter().map(line_text).collect();
        assert_eq!(german, vec![" Enter  Übernehmen", " Esc  Abbrechen"]);

        app.set_language(Language::En);
        let english: Vec<String> = key_hints(&app, palette).iter().map(line_text).collect();
        assert_eq!(english, vec![" Enter  Apply", " Esc  Cancel"]);
    }
}
