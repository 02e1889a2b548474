//! Status bar view
//!
//! The only thing drawn in minimized window mode: title, balance and the
//! key that restores the panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_balance;
use crate::i18n::{TextKey, TextProvider};
use crate::tui::app::App;
use crate::tui::theme::Palette;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, palette: Palette) {
    let language = app.prefs.language();
    let base = Style::default().fg(palette.text).bg(palette.button);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", language.text(TextKey::Title)),
            base.add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", base),
        Span::styled(
            format_balance(app.ledger.balance(), &language, app.prefs.currency()),
            base,
        ),
    ];

    if let Some(status) = &app.status {
        let style = if status.is_error {
            base.fg(palette.error)
        } else {
            base
        };
        spans.push(Span::styled(" │ ", base));
        spans.push(Span::styled(status.text.clone(), style));
    }

    spans.push(Span::styled(
        format!(" │ F8 {}", language.text(TextKey::WindowMode)),
        base,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
}
