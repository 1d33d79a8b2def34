//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Every
//! transition is a plain method or handler function testable without a
//! terminal.

use crate::model::{ConversationStore, Feedback, FeedbackKind, Message, MessageId, StoreError};
use crate::state::scroll_handler::{ScrollPosition, ScrollState};
use crate::state::search::{self, SearchState};
use crate::state::{EmojiPickerState, LineInput};
use tracing::{debug, info};

// ===== FocusPane =====

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Message composer.
    #[default]
    Input,
    /// Message list (selection, feedback, scrolling).
    Conversation,
    /// Search bar.
    Search,
    /// Emoji picker overlay.
    EmojiPicker,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Send: composer text → user message + pending placeholder
///   (`send_message`), placeholder → bot message (`resolve_pending_reply`)
/// - Feedback: toggled on the selected bot message
/// - Search: hidden ⇄ visible (`toggle_search_bar`); every query edit
///   re-runs the matcher (`update_search_query`)
/// - Emoji: picker open ⇄ closed; a choice is appended to the composer
#[derive(Debug, Clone)]
pub struct AppState {
    /// The conversation. Private so every mutation goes through methods
    /// that keep search results and scroll position consistent.
    store: ConversationStore,

    /// Message being composed.
    pub composer: LineInput,

    /// Text typed into the search bar.
    pub search_input: LineInput,

    /// Matcher result for `search_input`.
    pub search: SearchState,

    /// Whether the search bar is shown.
    pub search_bar_visible: bool,

    /// Emoji picker overlay.
    pub emoji_picker: EmojiPickerState,

    /// Conversation pane scroll.
    pub scroll: ScrollState,

    /// Keyboard focus.
    pub focus: FocusPane,

    /// Selected message, used for feedback. Never the pending placeholder.
    pub selected: Option<MessageId>,

    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// State over `store` with the given emoji picker.
    pub fn new(store: ConversationStore, emoji_picker: EmojiPickerState) -> Self {
        Self {
            store,
            composer: LineInput::new(),
            search_input: LineInput::new(),
            search: SearchState::Inactive,
            search_bar_visible: false,
            emoji_picker,
            scroll: ScrollState::new(),
            focus: FocusPane::Input,
            selected: None,
            help_visible: false,
        }
    }

    /// The conversation.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Whether a bot reply is in flight. The composer is disabled meanwhile.
    pub fn is_reply_pending(&self) -> bool {
        self.store.has_pending()
    }

    /// Whether the "jump to latest" affordance should be shown.
    pub fn needs_scroll_to_bottom_affordance(&self) -> bool {
        self.scroll.needs_scroll_to_bottom_affordance()
    }

    // ===== Sending =====

    /// Send the composed message and start a reply.
    ///
    /// On success the composer is cleared, the view follows the bottom, and
    /// the id of the new pending placeholder is returned so the caller can
    /// schedule its resolution.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ReplyAlreadyPending`] while a reply is in flight
    /// - [`StoreError::EmptyMessage`] for blank input; the composer is kept
    pub fn send_message(&mut self) -> Result<MessageId, StoreError> {
        if let Some(pending) = self.store.pending_id() {
            return Err(StoreError::ReplyAlreadyPending(pending));
        }

        self.store.append_user(self.composer.text())?;
        self.composer.clear();
        let pending = self.store.begin_reply()?;

        self.scroll.set_position(ScrollPosition::Bottom);
        self.refresh_search();
        info!(%pending, "Message sent, awaiting reply");
        Ok(pending)
    }

    /// Replace the pending placeholder with the bot's reply.
    pub fn resolve_pending_reply(&mut self, text: &str) -> MessageId {
        let id = self.store.resolve_reply(text);
        self.refresh_search();
        info!(%id, "Bot replied");
        id
    }

    // ===== Feedback =====

    /// Toggle feedback on the selected message.
    ///
    /// Returns `None` when nothing is selected.
    pub fn toggle_feedback_on_selected(
        &mut self,
        kind: FeedbackKind,
    ) -> Option<Result<Feedback, StoreError>> {
        let id = self.selected?;
        Some(self.store.set_feedback_by_id(id, kind))
    }

    // ===== Selection =====

    fn selectable_ids(&self) -> Vec<MessageId> {
        self.store
            .messages()
            .iter()
            .filter(|m| !m.is_pending())
            .map(Message::id)
            .collect()
    }

    /// Select the message after the current one, wrapping to the first.
    ///
    /// With no selection, selects the first message.
    pub fn select_next_message(&mut self) {
        let ids = self.selectable_ids();
        let next = match self.selected.and_then(|id| ids.iter().position(|&i| i == id)) {
            Some(pos) if pos + 1 < ids.len() => ids.get(pos + 1),
            _ => ids.first(),
        };
        self.select(next.copied());
    }

    /// Select the message before the current one, wrapping to the last.
    ///
    /// With no selection, selects the last message.
    pub fn select_prev_message(&mut self) {
        let ids = self.selectable_ids();
        let prev = match self.selected.and_then(|id| ids.iter().position(|&i| i == id)) {
            Some(pos) if pos > 0 => ids.get(pos - 1),
            _ => ids.last(),
        };
        self.select(prev.copied());
    }

    /// Select a message and scroll it into view.
    pub fn select(&mut self, id: Option<MessageId>) {
        self.selected = id;
        if let Some(id) = id {
            self.scroll.set_position(ScrollPosition::Reveal(id));
        }
    }

    // ===== Search =====

    /// Show or hide the search bar.
    ///
    /// Hiding clears the query and returns focus to the composer.
    pub fn toggle_search_bar(&mut self) {
        if self.search_bar_visible {
            self.search_bar_visible = false;
            self.search_input.clear();
            self.search = SearchState::Inactive;
            if self.focus == FocusPane::Search {
                self.focus = FocusPane::Input;
            }
        } else {
            self.search_bar_visible = true;
            self.focus = FocusPane::Search;
        }
        debug!(visible = self.search_bar_visible, "Search bar toggled");
    }

    /// Re-run the matcher for the search bar text from scratch.
    ///
    /// The cursor starts on the first match, which is scrolled into view.
    pub fn update_search_query(&mut self) {
        self.search = search::set_query(&self.store, self.search_input.text());
        debug!(
            query = self.search_input.text(),
            matches = self.search.matches().len(),
            "Search updated"
        );
        self.reveal_current_match();
    }

    /// Re-evaluate the active query after a store change.
    ///
    /// Keeps the cursor on the same message when it still matches.
    pub fn refresh_search(&mut self) {
        if self.search.is_active() {
            self.search = self.search.refreshed(&self.store);
        }
    }

    /// Select and scroll to the match under the cursor, if any.
    pub fn reveal_current_match(&mut self) {
        if let Some(id) = self.search.current_match().map(|m| m.message_id) {
            self.select(Some(id));
        }
    }

    // ===== Emoji =====

    /// Show or hide the emoji picker, moving focus with it.
    ///
    /// The picker does not open while a reply is pending.
    pub fn toggle_emoji_picker(&mut self) {
        if !self.emoji_picker.is_visible() && self.is_reply_pending() {
            debug!("Emoji picker not opened: reply pending");
            return;
        }
        if self.emoji_picker.toggle() {
            self.focus = FocusPane::EmojiPicker;
        } else if self.focus == FocusPane::EmojiPicker {
            self.focus = FocusPane::Input;
        }
    }

    /// Append the highlighted emoji to the composer and close the picker.
    ///
    /// The composer is left untouched while a reply is pending.
    pub fn insert_selected_emoji(&mut self) {
        let chosen = self.emoji_picker.choose();
        if self.is_reply_pending() {
            debug!("Emoji dropped: reply pending");
        } else if let Some(emoji) = chosen {
            self.composer.insert_str(&emoji);
            debug!(%emoji, "Emoji inserted");
        }
        self.focus = FocusPane::Input;
    }

    // ===== Focus =====

    /// Cycle focus: Input → Conversation → Search (when shown) → Input.
    ///
    /// Closes the emoji picker if it had focus.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Input => FocusPane::Conversation,
            FocusPane::Conversation if self.search_bar_visible => FocusPane::Search,
            FocusPane::Conversation | FocusPane::Search => FocusPane::Input,
            FocusPane::EmojiPicker => {
                self.emoji_picker.close();
                FocusPane::Input
            }
        };
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConversationStore::default(), EmojiPickerState::default())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
