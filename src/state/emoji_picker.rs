//! Emoji picker state.
//!
//! A fixed palette laid out as a grid. The picker only ever hands a single
//! emoji string back to the caller; what happens to it is up to the
//! composer.

use tracing::warn;

/// Number of columns in the picker grid.
pub const EMOJI_GRID_COLUMNS: usize = 8;

/// Emoji offered when the configuration does not supply a palette.
pub const DEFAULT_EMOJI_PALETTE: [&str; 40] = [
    "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🤣", //
    "😊", "😇", "🙂", "😉", "😍", "🥰", "😘", "😋", //
    "🤔", "🤨", "😐", "😑", "😶", "🙄", "😏", "😴", //
    "😢", "😭", "😤", "😠", "😱", "😳", "🥺", "😎", //
    "👍", "👎", "👏", "🙏", "💪", "❤️", "🔥", "🎉", //
];

/// Picker visibility and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPickerState {
    palette: Vec<String>,
    visible: bool,
    selected: usize,
}

impl EmojiPickerState {
    /// Closed picker over `palette`.
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            visible: false,
            selected: 0,
        }
    }

    /// Emoji offered by this picker.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Whether the picker is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the highlighted emoji.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Show the picker.
    ///
    /// Returns false and stays closed when there is nothing to pick from.
    pub fn open(&mut self) -> bool {
        if self.palette.is_empty() {
            warn!("Emoji palette is empty, picker stays closed");
            self.visible = false;
            return false;
        }
        self.visible = true;
        self.selected = self.selected.min(self.palette.len() - 1);
        true
    }

    /// Hide the picker.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Open when closed, close when open. Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        if self.visible {
            self.close();
            false
        } else {
            self.open()
        }
    }

    /// Move highlight one cell left. Stops at the start of the row.
    pub fn move_left(&mut self) {
        if self.selected % EMOJI_GRID_COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    /// Move highlight one cell right. Stops at the end of the row.
    pub fn move_right(&mut self) {
        let at_row_end = self.selected % EMOJI_GRID_COLUMNS == EMOJI_GRID_COLUMNS - 1;
        if !at_row_end && self.selected + 1 < self.palette.len() {
            self.selected += 1;
        }
    }

    /// Move highlight one row up.
    pub fn move_up(&mut self) {
        if self.selected >= EMOJI_GRID_COLUMNS {
            self.selected -= EMOJI_GRID_COLUMNS;
        }
    }

    /// Move highlight one row down. Stops on the last row.
    pub fn move_down(&mut self) {
        if self.selected + EMOJI_GRID_COLUMNS < self.palette.len() {
            self.selected += EMOJI_GRID_COLUMNS;
        }
    }

    /// Pick the highlighted emoji and close the picker.
    ///
    /// Returns `None` when the picker is not shown.
    pub fn choose(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        let emoji = self.palette.get(self.selected).cloned();
        self.close();
        emoji
    }
}

impl Default for EmojiPickerState {
    fn default() -> Self {
        Self::new(DEFAULT_EMOJI_PALETTE.iter().map(|e| (*e).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let picker = EmojiPickerState::default();

        assert!(!picker.is_visible());
        assert_eq!(picker.palette().len(), 40);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut picker = EmojiPickerState::default();

        assert!(picker.toggle());
        assert!(picker.is_visible());
        assert!(!picker.toggle());
        assert!(!picker.is_visible());
    }

    #[test]
    fn empty_palette_stays_closed() {
        let mut picker = EmojiPickerState::new(Vec::new());

        assert!(!picker.open());
        assert!(!picker.is_visible());
        assert_eq!(picker.choose(), None);
    }

    #[test]
    fn choose_returns_highlighted_emoji_and_closes() {
        let mut picker = EmojiPickerState::default();
        picker.open();
        picker.move_right();

        let emoji = picker.choose();

        assert_eq!(emoji.as_deref(), Some("😃"));
        assert!(!picker.is_visible());
    }

    #[test]
    fn choose_when_closed_returns_none() {
        let mut picker = EmojiPickerState::default();

        assert_eq!(picker.choose(), None);
    }

    #[test]
    fn grid_navigation_moves_by_rows() {
        let mut picker = EmojiPickerState::default();
        picker.open();

        picker.move_down();
        assert_eq!(picker.selected(), EMOJI_GRID_COLUMNS);

        picker.move_up();
        assert_eq!(picker.selected(), 0);
    }

    #[test]
    fn navigation_clamps_at_edges() {
        let mut picker = EmojiPickerState::default();
        picker.open();

        picker.move_left();
        picker.move_up();
        assert_eq!(picker.selected(), 0);

        for _ in 0..20 {
            picker.move_right();
        }
        assert_eq!(picker.selected(), EMOJI_GRID_COLUMNS - 1, "Stops at row end");

        for _ in 0..20 {
            picker.move_down();
        }
        assert_eq!(picker.selected(), 39, "Stops on last row");
    }

    #[test]
    fn move_right_does_not_pass_short_last_row() {
        let palette = (0..10).map(|i| i.to_string()).collect();
        let mut picker = EmojiPickerState::new(palette);
        picker.open();
        picker.move_down(); // index 8, last row holds 8 and 9

        picker.move_right();
        picker.move_right();

        assert_eq!(picker.selected(), 9);
    }
}
