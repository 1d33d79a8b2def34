//! Single-line text input buffer.
//!
//! Backs both the message composer and the search bar. The cursor is a
//! character index; byte offsets are computed on each edit so multibyte
//! input such as emoji is never split.

/// Editable single-line text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input holding `text` with the cursor at the end.
    #[cfg(test)]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of character index `char_idx`.
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor and advance.
    pub fn insert_char(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor and move past it.
    pub fn insert_str(&mut self, s: &str) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert_str(offset, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor.
    ///
    /// Returns false when the cursor is already at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let offset = self.byte_offset(self.cursor - 1);
        self.text.remove(offset);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor.
    ///
    /// Returns false when the cursor is at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
        true
    }

    /// Move cursor left. Saturates at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right. Saturates at the end of the text.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text before and after the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_char_advances_cursor() {
        let mut input = LineInput::new();

        input.insert_char('h');
        input.insert_char('i');

        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_in_middle() {
        let mut input = LineInput::with_text("hllo");
        input.move_home();
        input.move_right();

        input.insert_char('e');

        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_str_handles_multibyte_emoji() {
        let mut input = LineInput::with_text("hi ");

        input.insert_str("😀");
        input.insert_char('!');

        assert_eq!(input.text(), "hi 😀!");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn backspace_removes_whole_emoji() {
        let mut input = LineInput::with_text("ok👍");

        assert!(input.backspace());

        assert_eq!(input.text(), "ok");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = LineInput::with_text("abc");
        input.move_home();

        assert!(!input.backspace());
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = LineInput::with_text("abc");
        input.move_home();

        assert!(input.delete());

        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = LineInput::with_text("abc");

        assert!(!input.delete());
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn cursor_movement_saturates() {
        let mut input = LineInput::with_text("ab");

        input.move_right();
        assert_eq!(input.cursor(), 2);

        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);

        input.move_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut input = LineInput::with_text("message");

        input.clear();

        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn split_at_cursor_respects_char_boundaries() {
        let mut input = LineInput::with_text("é😀x");
        input.move_left();

        assert_eq!(input.split_at_cursor(), ("é😀", "x"));
    }
}
