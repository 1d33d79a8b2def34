//! Match navigation handler.
//!
//! Steps the search cursor through the match sequence with wrap-around and
//! brings the matched message into view.

use crate::state::AppState;
use tracing::debug;

/// Navigate to the next search match.
///
/// Behavior:
/// - If no query is active or there are no matches, does nothing
/// - Wraps from the last match to the first
/// - Selects the matched message and scrolls it into view
pub fn next_match(state: &mut AppState) {
    if state.search.current_match().is_none() {
        return;
    }
    state.search.advance();
    state.reveal_current_match();
    debug!(current = ?state.search.current_index(), "Next match");
}

/// Navigate to the previous search match.
///
/// Behavior:
/// - If no query is active or there are no matches, does nothing
/// - Wraps from the first match to the last
/// - Selects the matched message and scrolls it into view
pub fn prev_match(state: &mut AppState) {
    if state.search.current_match().is_none() {
        return;
    }
    state.search.retreat();
    state.reveal_current_match();
    debug!(current = ?state.search.current_index(), "Previous match");
}

// ===== Tests =====

#[cfg(test)]
#[path = "match_navigation_handler_tests.rs"]
mod tests;
