//! History panel view
//!
//! One panel per log, visible in the fullscreen and maximized window modes.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_record_row, history_title};
use crate::i18n::TextKey;
use crate::models::TransactionKind;
use crate::tui::app::{App, HistoryState};
use crate::tui::theme::Palette;

/// Render the recent records of one log
pub fn render(frame: &mut Frame, app: &App, kind: TransactionKind, area: Rect, palette: Palette) {
    let base = Style::default().fg(palette.text).bg(palette.background);
    let language = app.prefs.language();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", history_title(kind, &language)))
        .style(base)
        .border_style(base.fg(palette.accent));

    let lines: Vec<Line> = match app.history(kind) {
        HistoryState::Records(records) if !records.is_empty() => records
            .iter()
            .map(|record| Line::from(format_record_row(record, app.prefs.currency())))
            .collect(),
        HistoryState::Unreadable => vec![Line::styled(
            app.text(TextKey::HistoryUnreadable),
            base.fg(palette.error),
        )],
        _ => vec![Line::from(app.text(TextKey::NoTransactions))],
    };

    frame.render_widget(Paragraph::new(lines).block(block).style(base), area);
}
