//! Keyboard bindings for the conversation pane.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted while the conversation pane has focus; the composer and
/// search bar consume printable keys as text.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and lock-key state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    /// Bind a printable character. Terminals disagree on whether shifted
    /// symbols carry SHIFT, so both forms are registered.
    fn bind_char(&mut self, ch: char, action: KeyAction) {
        self.bind(KeyCode::Char(ch), KeyModifiers::NONE, action);
        self.bind(KeyCode::Char(ch), KeyModifiers::SHIFT, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Message selection
        keys.bind_char('j', KeyAction::SelectNext);
        keys.bind_char('k', KeyAction::SelectPrev);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);

        // Scrolling
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind_char('g', KeyAction::ScrollToTop);
        keys.bind_char('G', KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Feedback
        keys.bind_char('+', KeyAction::Like);
        keys.bind_char('l', KeyAction::Like);
        keys.bind_char('-', KeyAction::Dislike);
        keys.bind_char('d', KeyAction::Dislike);

        // Search
        keys.bind_char('/', KeyAction::ToggleSearch);
        keys.bind_char('n', KeyAction::NextMatch);
        keys.bind_char('N', KeyAction::PrevMatch);

        // Composer
        keys.bind_char('e', KeyAction::ToggleEmojiPicker);
        keys.bind_char('i', KeyAction::FocusInput);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::FocusInput);

        // Application controls
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);
        keys.bind_char('q', KeyAction::Quit);
        keys.bind_char('?', KeyAction::Help);

        keys
    }
}
