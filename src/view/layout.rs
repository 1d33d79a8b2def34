//! Screen layout and chrome rendering.
//!
//! Pure layout logic: the screen splits into header, conversation, optional
//! search bar, composer and status bar. Overlays draw last.

use crate::state::{AppState, FocusPane};
use crate::view::constants::{
    HEADER_HEIGHT, HEADER_TITLE, INPUT_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::emoji_picker::EmojiPicker;
use crate::view::message::{ConversationLayout, ConversationView};
use crate::view::search_input::TextBox;
use crate::view::{help, MessageStyles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown in the status bar while the view is scrolled away from the bottom.
pub const NEW_MESSAGES_HINT: &str = "↓ newer messages (G)";

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar.
    pub header: Rect,
    /// Bordered conversation pane.
    pub conversation: Rect,
    /// Search bar, when shown.
    pub search: Option<Rect>,
    /// Composer.
    pub input: Rect,
    /// Status line.
    pub status: Rect,
}

impl AppLayout {
    /// Split `area` for `state`.
    pub fn calculate(area: Rect, state: &AppState) -> Self {
        let search_height = if state.search_bar_visible {
            SEARCH_BAR_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(search_height),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            conversation: chunks[1],
            search: state.search_bar_visible.then_some(chunks[2]),
            input: chunks[3],
            status: chunks[4],
        }
    }

    /// Conversation area inside its border.
    pub fn conversation_inner(&self) -> Rect {
        self.conversation.inner(Margin::new(1, 1))
    }
}

/// Render a full frame.
///
/// `conversation` must have been built for the width of
/// [`AppLayout::conversation_inner`] and the scroll state resolved against it.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    conversation: &ConversationLayout,
    styles: &MessageStyles,
) {
    let layout = AppLayout::calculate(frame.area(), state);

    render_header(frame, layout.header, styles);
    render_conversation(frame, &layout, state, conversation, styles);

    if let Some(search_area) = layout.search {
        let search_box = TextBox::new(&state.search_input, " Search ")
            .focused(state.focus == FocusPane::Search, styles.focused_border);
        frame.render_widget(search_box, search_area);
    }

    render_input(frame, layout.input, state, styles);
    render_status_bar(frame, layout.status, state, styles);

    if state.emoji_picker.is_visible() {
        let picker = EmojiPicker::new(&state.emoji_picker, styles.focused_border);
        let area = picker.area(layout.conversation, frame.area());
        frame.render_widget(picker, area);
    }

    if state.help_visible {
        help::render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, styles: &MessageStyles) {
    let header = Paragraph::new(Line::from(HEADER_TITLE))
        .style(styles.header)
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_conversation(
    frame: &mut Frame,
    layout: &AppLayout,
    state: &AppState,
    conversation: &ConversationLayout,
    styles: &MessageStyles,
) {
    let border_style = if state.focus == FocusPane::Conversation {
        styles.focused_border
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Conversation ");
    frame.render_widget(block, layout.conversation);

    frame.render_widget(
        ConversationView::new(conversation, state.scroll.offset()),
        layout.conversation_inner(),
    );
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState, styles: &MessageStyles) {
    let pending = state.is_reply_pending();
    let title = if pending {
        " Message (waiting for reply…) "
    } else {
        " Message (Enter to send) "
    };
    let text_style = if pending { styles.muted } else { Style::default() };
    let focused = state.focus == FocusPane::Input && !pending;

    let input = TextBox::new(&state.composer, title)
        .focused(focused, styles.focused_border)
        .text_style(text_style);
    frame.render_widget(input, area);
}

/// Status line text for `state`.
///
/// Left: match counter and reply progress. Right: the newer-messages hint.
pub fn status_text(state: &AppState) -> (String, Option<&'static str>) {
    let mut parts = Vec::new();

    if state.search.is_active() {
        match (state.search.current_index(), state.search.matches().len()) {
            (Some(index), total) => parts.push(format!("Match {}/{}", index + 1, total)),
            (None, _) => parts.push("No matches".to_string()),
        }
    }

    if state.is_reply_pending() {
        parts.push("Bot is typing…".to_string());
    }

    parts.push(
        match state.focus {
            FocusPane::Input => "Enter: send | Tab: conversation | F1: help",
            FocusPane::Conversation => "j/k: select | +/-: like/dislike | ?: help",
            FocusPane::Search => "Enter/↓: next | ↑: previous | Esc: close",
            FocusPane::EmojiPicker => "Arrows: move | Enter: insert | Esc: close",
        }
        .to_string(),
    );

    let hint = state
        .needs_scroll_to_bottom_affordance()
        .then_some(NEW_MESSAGES_HINT);
    (parts.join("  ·  "), hint)
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &MessageStyles) {
    let (text, hint) = status_text(state);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles.muted))),
        area,
    );

    if let Some(hint) = hint {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, styles.selection)))
                .alignment(Alignment::Right),
            area,
        );
    }
}
