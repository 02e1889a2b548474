//! Layout definitions for the TUI
//!
//! Maps the window mode setting onto terminal regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::WindowMode;

/// Size of the panel in normal window mode
pub const NORMAL_WIDTH: u16 = 60;
pub const NORMAL_HEIGHT: u16 = 14;

/// Layout regions for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLayout {
    /// Only a one-line status bar
    Minimized { bar: Rect },
    /// Main panel, optionally with two history panels underneath
    Panel {
        main: Rect,
        history: Option<(Rect, Rect)>,
    },
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, mode: WindowMode) -> Self {
        match mode {
            WindowMode::Minimized => Self::Minimized {
                bar: Rect { height: area.height.min(1), ..area },
            },
            WindowMode::Normal => Self::Panel {
                main: centered_rect(NORMAL_WIDTH, NORMAL_HEIGHT, area),
                history: None,
            },
            WindowMode::Fullscreen | WindowMode::Maximized => {
                let vertical = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(NORMAL_HEIGHT), // Main panel
                        Constraint::Min(4),                // History
                    ])
                    .split(area);

                let history = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(vertical[1]);

                Self::Panel {
                    main: vertical[0],
                    history: Some((history[0], history[1])),
                }
            }
        }
    }
}

/// A rectangle of at most `width` x `height` centred in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
