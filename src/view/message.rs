//! Conversation pane rendering.
//!
//! Messages are laid out into a flat list of terminal lines before anything
//! is drawn. The layout remembers which lines each message occupies so the
//! scroll state can bring a selected message or search match into view.
//!
//! Each message renders as:
//!
//! ```text
//! ▶ Bot · 14:02
//!   Hello! Ask me anything.
//!   [+] like  [-] dislike  You liked this message
//!
//! ```

use crate::model::{Message, MessageBody, MessageId};
use crate::state::{AppState, SearchMatch};
use crate::view::constants::MESSAGE_INDENT;
use crate::view::MessageStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::collections::HashMap;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Text of the pending reply placeholder.
pub const TYPING_INDICATOR: &str = "Bot is typing…";

const SELECTION_MARKER: &str = "▶ ";

// ===== Wrapping =====

/// Byte ranges of `text` that fit `width` display columns per line.
///
/// Breaks after whitespace where possible, otherwise mid-word. Explicit
/// newlines always start a new line and are not part of any range.
pub fn wrap_ranges(text: &str, width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut para_start = 0;

    for para in text.split('\n') {
        let para_end = para_start + para.len();
        let mut line_start = para_start;
        let mut line_width = 0;
        let mut last_break: Option<usize> = None;

        for (i, ch) in para.char_indices() {
            let at = para_start + i;
            let ch_width = ch.width().unwrap_or(0);

            if line_width + ch_width > width && at > line_start {
                match last_break {
                    Some(brk) if brk > line_start => {
                        lines.push(line_start..brk);
                        line_width = display_width(&text[brk..at]);
                        line_start = brk;
                    }
                    _ => {
                        lines.push(line_start..at);
                        line_width = 0;
                        line_start = at;
                    }
                }
                last_break = None;
            }

            line_width += ch_width;
            if ch.is_whitespace() {
                last_break = Some(at + ch.len_utf8());
            }
        }

        lines.push(line_start..para_end);
        para_start = para_end + 1;
    }

    lines
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Split `line` of `text` into spans, styling the parts covered by `highlights`.
///
/// `highlights` must be sorted and non-overlapping.
fn highlighted_spans(
    text: &str,
    line: Range<usize>,
    highlights: &[Range<usize>],
    highlight_style: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut cursor = line.start;

    for range in highlights {
        let start = range.start.max(line.start);
        let end = range.end.min(line.end);
        if start >= end {
            continue;
        }
        if cursor < start {
            spans.push(Span::raw(text[cursor..start].to_string()));
        }
        spans.push(Span::styled(text[start..end].to_string(), highlight_style));
        cursor = end;
    }

    if cursor < line.end {
        spans.push(Span::raw(text[cursor..line.end].to_string()));
    }
    spans
}

// ===== Conversation layout =====

/// Rendered conversation lines plus the line span of each message.
#[derive(Debug, Clone, Default)]
pub struct ConversationLayout {
    lines: Vec<Line<'static>>,
    spans: HashMap<MessageId, Range<usize>>,
}

impl ConversationLayout {
    /// Lay out every message in `state` for a pane `width` columns wide.
    pub fn build(state: &AppState, width: u16, styles: &MessageStyles) -> Self {
        let body_width = usize::from(width.saturating_sub(MESSAGE_INDENT));
        let current = state.search.current_match().map(|m| m.message_id);
        let mut layout = Self::default();

        for message in state.store().messages() {
            let start = layout.lines.len();
            let highlight = state.search.match_for(message.id()).map(|m| {
                let style = if Some(m.message_id) == current {
                    styles.current_highlight
                } else {
                    styles.highlight
                };
                (m, style)
            });

            layout.push_header(message, state.selected == Some(message.id()), styles);
            layout.push_body(message, body_width, highlight, styles);
            if message.shows_feedback() {
                layout.push_feedback_row(message, styles);
            }
            layout.spans.insert(message.id(), start..layout.lines.len());
            layout.lines.push(Line::default());
        }

        layout
    }

    fn push_header(&mut self, message: &Message, selected: bool, styles: &MessageStyles) {
        let marker = if selected {
            Span::styled(SELECTION_MARKER, styles.selection)
        } else {
            Span::raw(" ".repeat(SELECTION_MARKER.chars().count()))
        };
        let label = if message.is_user() { "You" } else { "Bot" };

        self.lines.push(Line::from(vec![
            marker,
            Span::styled(label, styles.style_for_author(message.author())),
            Span::styled(
                format!(" · {}", message.sent_at().format("%H:%M")),
                styles.muted,
            ),
        ]));
    }

    fn push_body(
        &mut self,
        message: &Message,
        width: usize,
        highlight: Option<(&SearchMatch, Style)>,
        styles: &MessageStyles,
    ) {
        let indent = " ".repeat(usize::from(MESSAGE_INDENT));
        let text = match message.body() {
            MessageBody::Text(text) => text,
            MessageBody::Pending => {
                self.lines.push(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(TYPING_INDICATOR, styles.pending),
                ]));
                return;
            }
        };

        let (ranges, style) = match highlight {
            Some((m, style)) => (m.ranges.as_slice(), style),
            None => (&[][..], Style::default()),
        };

        for line in wrap_ranges(text, width) {
            let mut spans = vec![Span::raw(indent.clone())];
            spans.extend(highlighted_spans(text, line, ranges, style));
            self.lines.push(Line::from(spans));
        }
    }

    fn push_feedback_row(&mut self, message: &Message, styles: &MessageStyles) {
        let (like, dislike) = styles.feedback_controls(message.feedback());
        let mut spans = vec![
            Span::raw(" ".repeat(usize::from(MESSAGE_INDENT))),
            Span::styled("[+] like", like),
            Span::raw("  "),
            Span::styled("[-] dislike", dislike),
        ];
        if let Some(text) = message.feedback_text() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(text, styles.feedback_active));
        }
        self.lines.push(Line::from(spans));
    }

    /// Total number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// All lines, top to bottom.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Lines occupied by message `id`, excluding the trailing blank line.
    pub fn span_of(&self, id: MessageId) -> Option<Range<usize>> {
        self.spans.get(&id).cloned()
    }
}

// ===== Widget =====

/// Visible window of a [`ConversationLayout`].
pub struct ConversationView<'a> {
    layout: &'a ConversationLayout,
    offset: usize,
}

impl<'a> ConversationView<'a> {
    /// View of `layout` starting at line `offset`.
    pub fn new(layout: &'a ConversationLayout, offset: usize) -> Self {
        Self { layout, offset }
    }
}

impl Widget for ConversationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible: Vec<Line> = self
            .layout
            .lines()
            .iter()
            .skip(self.offset)
            .take(usize::from(area.height))
            .cloned()
            .collect();

        Paragraph::new(visible).render(area, buf);
    }
}
