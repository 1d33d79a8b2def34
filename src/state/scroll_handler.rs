//! Vertical scrolling for the conversation pane.
//!
//! Scroll intent is recorded as a [`ScrollPosition`] and resolved to a line
//! offset once the renderer knows how tall the content and viewport are.
//! Following the bottom is the default, so new messages stay in view until
//! the user scrolls away.

use crate::model::{KeyAction, MessageId};
use crate::state::AppState;
use std::ops::Range;

/// Lines from the bottom within which the view counts as "at the bottom".
pub const NEAR_BOTTOM_THRESHOLD: usize = 2;

/// Semantic scroll position, resolved against layout at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    /// First line at the top of the viewport.
    Top,
    /// Explicit line offset.
    AtLine(usize),
    /// Follow the last line. New content keeps the view pinned to the bottom.
    Bottom,
    /// Bring a message fully into view, keeping the offset otherwise stable.
    Reveal(MessageId),
}

/// Scroll state for the conversation pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    position: ScrollPosition,
    offset: usize,
    content_height: usize,
    viewport_height: usize,
}

impl ScrollState {
    /// Scroll state following the bottom.
    pub fn new() -> Self {
        Self {
            position: ScrollPosition::Bottom,
            offset: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Current semantic position.
    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    /// Resolved first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Last known viewport height in lines.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Whether new content keeps the view at the bottom.
    pub fn is_following(&self) -> bool {
        self.position == ScrollPosition::Bottom
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Set a new position; resolved on the next [`resolve`](Self::resolve).
    pub fn set_position(&mut self, position: ScrollPosition) {
        self.position = position;
    }

    /// Resolve the position against the current layout.
    ///
    /// `spans` maps a message id to the lines it occupies and is consulted
    /// for [`ScrollPosition::Reveal`]. After resolving a reveal the position
    /// becomes an explicit line, unless that line is the bottom.
    pub fn resolve<F>(&mut self, content_height: usize, viewport_height: usize, spans: F)
    where
        F: Fn(MessageId) -> Option<Range<usize>>,
    {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset();

        self.offset = match self.position {
            ScrollPosition::Top => 0,
            ScrollPosition::Bottom => max,
            ScrollPosition::AtLine(line) => line.min(max),
            ScrollPosition::Reveal(id) => match spans(id) {
                Some(lines) => reveal_offset(self.offset, lines, viewport_height).min(max),
                None => self.offset.min(max),
            },
        };

        if let ScrollPosition::Reveal(_) | ScrollPosition::AtLine(_) = self.position {
            self.position = if self.offset >= max && max > 0 {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::AtLine(self.offset)
            };
        }
    }

    /// Whether the viewport shows the last lines of content.
    pub fn is_near_bottom(&self) -> bool {
        self.max_offset().saturating_sub(self.offset) <= NEAR_BOTTOM_THRESHOLD
    }

    /// Whether the "jump to latest" affordance should be shown.
    pub fn needs_scroll_to_bottom_affordance(&self) -> bool {
        !self.is_near_bottom()
    }

    /// Scroll up by `lines`. Stops following the bottom.
    pub fn scroll_up(&mut self, lines: usize) {
        self.position = ScrollPosition::AtLine(self.offset.saturating_sub(lines));
    }

    /// Scroll down by `lines`. Resumes following once the bottom is reached.
    pub fn scroll_down(&mut self, lines: usize) {
        let target = self.offset.saturating_add(lines);
        self.position = if target >= self.max_offset() {
            ScrollPosition::Bottom
        } else {
            ScrollPosition::AtLine(target)
        };
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest offset change that brings `lines` into a viewport of `height`.
fn reveal_offset(current: usize, lines: Range<usize>, height: usize) -> usize {
    if lines.start < current || height == 0 {
        lines.start
    } else if lines.end > current + height {
        // Align bottom, but never push the first line out of view.
        (lines.end - height).min(lines.start)
    } else {
        current
    }
}

/// Handle a scroll keyboard action on the conversation pane.
///
/// Non-scroll actions are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let page = state.scroll.viewport_height().max(1);
    match action {
        KeyAction::PageUp => state.scroll.scroll_up(page),
        KeyAction::PageDown => state.scroll.scroll_down(page),
        KeyAction::ScrollToTop => state.scroll.set_position(ScrollPosition::Top),
        KeyAction::ScrollToBottom => state.scroll.set_position(ScrollPosition::Bottom),
        _ => {}
    }
}
