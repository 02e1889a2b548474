//! Views for the TUI
//!
//! `render` picks the layout for the current window mode and draws the
//! panels into it.

pub mod history;
pub mod main_panel;
pub mod status_bar;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::models::TransactionKind;

use super::app::App;
use super::layout::AppLayout;
use super::theme::Palette;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.settings().theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    match AppLayout::new(area, app.settings().window_mode) {
        AppLayout::Minimized { bar } => status_bar::render(frame, app, bar, palette),
        AppLayout::Panel { main, history } => {
            main_panel::render(frame, app, main, palette);
            if let Some((deposits, withdrawals)) = history {
                history::render(frame, app, TransactionKind::Deposit, deposits, palette);
                history::render(frame, app, TransactionKind::Withdraw, withdrawals, palette);
            }
        }
    }
}
