//! Search bar input handling (pure state transitions).
//!
//! Every edit of the query re-runs the matcher from scratch, so highlights
//! track the text as it is typed. Cursor movement does not touch results.

use crate::state::{match_navigation_handler, AppState};

/// Insert a character into the query at the cursor.
pub fn handle_char_input(state: &mut AppState, ch: char) {
    state.search_input.insert_char(ch);
    state.update_search_query();
}

/// Delete the character before the cursor. No-op at the start of the query.
pub fn handle_backspace(state: &mut AppState) {
    if state.search_input.backspace() {
        state.update_search_query();
    }
}

/// Delete the character under the cursor. No-op at the end of the query.
pub fn handle_delete(state: &mut AppState) {
    if state.search_input.delete() {
        state.update_search_query();
    }
}

/// Move the query cursor left. Saturates at 0.
pub fn handle_cursor_left(state: &mut AppState) {
    state.search_input.move_left();
}

/// Move the query cursor right. Saturates at the query length.
pub fn handle_cursor_right(state: &mut AppState) {
    state.search_input.move_right();
}

/// Move the query cursor to the start.
pub fn handle_home(state: &mut AppState) {
    state.search_input.move_home();
}

/// Move the query cursor to the end.
pub fn handle_end(state: &mut AppState) {
    state.search_input.move_end();
}

/// Enter in the search bar: step to the next match.
pub fn submit_search(state: &mut AppState) {
    match_navigation_handler::next_match(state);
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
