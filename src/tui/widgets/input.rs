//! Text input widget
//!
//! A single-line text field with a character-based cursor, so multi-byte
//! currency symbols like `€` edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Palette;

/// Editable text state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.len();
        self
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Build a renderable line for this input
    pub fn widget<'a>(&'a self, label: &'a str, palette: Palette) -> InputLine<'a> {
        InputLine {
            input: self,
            label,
            palette,
        }
    }
}

/// Renders a [`TextInput`] as `label: content` with a block cursor
pub struct InputLine<'a> {
    input: &'a TextInput,
    label: &'a str,
    palette: Palette,
}

impl Widget for InputLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let base = Style::default().fg(self.palette.text).bg(self.palette.background);
        let field = Style::default().fg(self.palette.text).bg(self.palette.button);
        let cursor = Style::default()
            .fg(self.palette.button)
            .bg(self.palette.text)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(self.label, base.fg(self.palette.accent)),
            Span::styled(": ", base),
        ];

        let content = self.input.value();
        let before: String = content.chars().take(self.input.cursor).collect();
        let at: String = content
            .chars()
            .nth(self.input.cursor)
            .map(String::from)
            .unwrap_or_else(|| " ".to_string());
        let after: String = content.chars().skip(self.input.cursor + 1).collect();

        spans.push(Span::styled(before, field));
        spans.push(Span::styled(at, cursor));
        spans.push(Span::styled(after, field));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
