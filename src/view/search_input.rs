//! Single-line text boxes: the search bar and the composer.

use crate::state::LineInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render `input` as a line, drawing a block cursor when `show_cursor`.
pub fn line_with_cursor(input: &LineInput, show_cursor: bool) -> Line<'static> {
    if !show_cursor {
        return Line::from(input.text().to_string());
    }

    let (before, after) = input.split_at_cursor();
    let mut after_chars = after.chars();
    let cursor_char = after_chars
        .next()
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let remaining: String = after_chars.collect();

    Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(
            cursor_char,
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        ),
        Span::raw(remaining),
    ])
}

/// Bordered single-line text box.
pub struct TextBox<'a> {
    input: &'a LineInput,
    title: &'a str,
    focused: bool,
    border_style: Style,
    text_style: Style,
}

impl<'a> TextBox<'a> {
    /// Box titled `title` around `input`.
    pub fn new(input: &'a LineInput, title: &'a str) -> Self {
        Self {
            input,
            title,
            focused: false,
            border_style: Style::default(),
            text_style: Style::default(),
        }
    }

    /// Show the cursor and use `border_style` when `focused`.
    pub fn focused(mut self, focused: bool, border_style: Style) -> Self {
        self.focused = focused;
        if focused {
            self.border_style = border_style;
        }
        self
    }

    /// Style of the text inside the box.
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }
}

impl Widget for TextBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title(self.title);

        Paragraph::new(line_with_cursor(self.input, self.focused))
            .style(self.text_style)
            .block(block)
            .render(area, buf);
    }
}
