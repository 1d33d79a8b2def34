//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod app_state;
pub mod emoji_picker;
pub mod line_input;
pub mod match_navigation_handler;
pub mod reply_scheduler;
pub mod scroll_handler;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use emoji_picker::{DEFAULT_EMOJI_PALETTE, EMOJI_GRID_COLUMNS, EmojiPickerState};
pub use line_input::LineInput;
pub use match_navigation_handler::{next_match, prev_match};
pub use reply_scheduler::{DEFAULT_REPLY_DELAY, ReplyScheduler, ScheduledReply};
pub use scroll_handler::{ScrollPosition, ScrollState, handle_scroll_action};
pub use search::{SearchMatch, SearchQuery, SearchState};
