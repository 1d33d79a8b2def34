//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Title shown in the header bar.
pub const HEADER_TITLE: &str = "Chat Bot";

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search bar in lines (border + query).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the composer in lines (border + text).
pub const INPUT_HEIGHT: u16 = 3;

/// Columns taken by the selection marker in front of each message.
pub const MESSAGE_INDENT: u16 = 2;

/// Width of one emoji picker cell in columns.
pub const EMOJI_CELL_WIDTH: u16 = 4;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Longest the event loop blocks without a scheduled reply.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);
