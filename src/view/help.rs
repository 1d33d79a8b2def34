//! Keyboard shortcut overlay.
//!
//! A centered modal listing every binding, grouped by the pane it applies
//! to. Toggled by `?` or F1, dismissed by Esc.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 12;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Anywhere",
        &[
            ("Ctrl+C", "Quit"),
            ("Ctrl+F", "Show/hide search bar"),
            ("Ctrl+E", "Show/hide emoji picker"),
            ("Tab", "Cycle focus"),
            ("F1", "Show/hide this help"),
            ("Esc", "Close overlay / back to message box"),
        ],
    ),
    (
        "Message box",
        &[
            ("Enter", "Send message"),
            ("PgUp/PgDn", "Scroll conversation"),
        ],
    ),
    (
        "Conversation",
        &[
            ("j/↓  k/↑", "Select next / previous message"),
            ("PgUp/PgDn", "Scroll one page"),
            ("g/G", "Go to top / bottom"),
            ("+ or l", "Like selected reply"),
            ("- or d", "Dislike selected reply"),
            ("n/N", "Next / previous match"),
            ("/", "Search"),
            ("e", "Emoji picker"),
            ("i", "Back to message box"),
            ("q", "Quit"),
            ("?", "Show/hide this help"),
        ],
    ),
    (
        "Search bar",
        &[
            ("Enter/↓", "Next match"),
            ("↑", "Previous match"),
        ],
    ),
    (
        "Emoji picker",
        &[("Arrows", "Move"), ("Enter", "Insert emoji")],
    ),
];

/// Modal shortcut reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Keyboard Shortcuts ")
            .title_bottom(
                Line::styled(
                    " Esc or ? closes ",
                    Style::default().add_modifier(Modifier::DIM),
                )
                .centered(),
            );

        Paragraph::new(shortcut_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Draw the overlay over the middle of the frame.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(HelpOverlay, popup);
}

/// Rect covering the given percentages of `area`, centered in it.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn shortcut_lines() -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    SECTIONS
        .iter()
        .enumerate()
        .flat_map(|(i, (title, bindings))| {
            let spacer = (i > 0).then(Line::default);
            let title = Line::from(Span::styled(*title, heading));
            let rows = bindings.iter().map(move |(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), key),
                    Span::raw(*action),
                ])
            });
            spacer.into_iter().chain(std::iter::once(title)).chain(rows)
        })
        .collect()
}
