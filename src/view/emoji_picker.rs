//! Emoji picker overlay.

use crate::state::{EmojiPickerState, EMOJI_GRID_COLUMNS};
use crate::view::constants::EMOJI_CELL_WIDTH;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Grid of emoji with the highlighted cell reversed.
pub struct EmojiPicker<'a> {
    state: &'a EmojiPickerState,
    border_style: Style,
}

impl<'a> EmojiPicker<'a> {
    /// Picker widget over `state`.
    pub fn new(state: &'a EmojiPickerState, border_style: Style) -> Self {
        Self {
            state,
            border_style,
        }
    }

    /// Size of the overlay including borders.
    pub fn size(&self) -> (u16, u16) {
        let rows = self.state.palette().len().div_ceil(EMOJI_GRID_COLUMNS);
        let width = EMOJI_GRID_COLUMNS as u16 * EMOJI_CELL_WIDTH + 2;
        let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
        (width, height)
    }

    /// Overlay area anchored to the bottom-left of `anchor`, clipped to `bounds`.
    pub fn area(&self, anchor: Rect, bounds: Rect) -> Rect {
        let (width, height) = self.size();
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let bottom = anchor.y.saturating_add(anchor.height);
        Rect {
            x: anchor.x,
            y: bottom.saturating_sub(height).max(bounds.y),
            width,
            height,
        }
    }

    fn rows(&self) -> Vec<Line<'static>> {
        let selected = self.state.selected();
        let cell = usize::from(EMOJI_CELL_WIDTH);

        self.state
            .palette()
            .chunks(EMOJI_GRID_COLUMNS)
            .enumerate()
            .map(|(row, emojis)| {
                let spans = emojis.iter().enumerate().map(|(col, emoji)| {
                    let style = if row * EMOJI_GRID_COLUMNS + col == selected {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };
                    Span::styled(format!(" {emoji:<width$}", width = cell - 2), style)
                });
                Line::from(spans.collect::<Vec<_>>())
            })
            .collect()
    }
}

impl Widget for EmojiPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .title(" Emoji ");
        Paragraph::new(self.rows()).block(block).render(area, buf);
    }
}
