//! Colour palettes for the light and dark themes

use ratatui::style::Color;

use crate::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Input fields and key hints
    pub button: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(0x2e, 0x2e, 0x2e),
                text: Color::Rgb(0xff, 0xff, 0xff),
                button: Color::Rgb(0x44, 0x44, 0x44),
                accent: Color::Rgb(80, 160, 160),
                error: Color::Rgb(230, 110, 110),
            },
            Theme::Light => Self {
                background: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x00, 0x00, 0x00),
                button: Color::Rgb(0xe0, 0xe0, 0xe0),
                accent: Color::Rgb(20, 100, 120),
                error: Color::Rgb(190, 30, 30),
            },
        }
    }
}
