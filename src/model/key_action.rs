//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Message selection
    /// Select the next message in the conversation. Default: j/↓
    SelectNext,
    /// Select the previous message in the conversation. Default: k/↑
    SelectPrev,

    // Scrolling
    /// Scroll up by one page height. Default: Page Up/Ctrl+u
    PageUp,
    /// Scroll down by one page height. Default: Page Down/Ctrl+d
    PageDown,
    /// Jump to top of conversation. Default: g/Home
    ScrollToTop,
    /// Jump to bottom of conversation and resume following. Default: G/End
    ScrollToBottom,

    // Feedback
    /// Toggle like on the selected bot message. Default: +/l
    Like,
    /// Toggle dislike on the selected bot message. Default: -/d
    Dislike,

    // Search
    /// Show or hide the search bar. Default: //Ctrl+f
    ToggleSearch,
    /// Move to the next search match. Default: n
    NextMatch,
    /// Move to the previous search match. Default: N
    PrevMatch,

    // Composer
    /// Show or hide the emoji picker. Default: e/Ctrl+e
    ToggleEmojiPicker,
    /// Focus the message input. Default: i
    FocusInput,
    /// Cycle focus: Input → Conversation → Search. Default: Tab
    CycleFocus,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?/F1
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn like_not_equals_dislike() {
        assert_ne!(KeyAction::Like, KeyAction::Dislike);
    }

    #[test]
    fn actions_are_hashable() {
        let set: HashSet<KeyAction> = [KeyAction::NextMatch, KeyAction::PrevMatch, KeyAction::NextMatch]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
