//! Message styling configuration.
//!
//! Distinct styles for user and bot messages, feedback, selection and search
//! highlights. With colors disabled, highlights fall back to text modifiers
//! so matches stay visible.

use crate::model::{Author, Feedback};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== MessageStyles =====

/// Styles used by the conversation pane and its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStyles {
    /// Author label of user messages.
    pub user: Style,
    /// Author label of bot messages.
    pub bot: Style,
    /// "Bot is typing" placeholder.
    pub pending: Style,
    /// Timestamps, hints and inactive controls.
    pub muted: Style,
    /// Active like/dislike control.
    pub feedback_active: Style,
    /// Every occurrence of the search query.
    pub highlight: Style,
    /// Occurrences inside the current match.
    pub current_highlight: Style,
    /// Selection marker.
    pub selection: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Header bar.
    pub header: Style,
}

impl MessageStyles {
    /// Styles honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                user: bold.fg(Color::Cyan),
                bot: bold.fg(Color::Green),
                pending: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
                muted: Style::default().fg(Color::DarkGray),
                feedback_active: bold.fg(Color::Yellow),
                highlight: Style::default().bg(Color::Yellow).fg(Color::Black),
                current_highlight: Style::default()
                    .bg(Color::LightRed)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                selection: bold.fg(Color::Magenta),
                focused_border: Style::default().fg(Color::Cyan),
                header: bold.fg(Color::White).bg(Color::Blue),
            }
        } else {
            Self {
                user: bold,
                bot: bold,
                pending: Style::default().add_modifier(Modifier::ITALIC),
                muted: Style::default().add_modifier(Modifier::DIM),
                feedback_active: bold,
                highlight: Style::default().add_modifier(Modifier::UNDERLINED),
                current_highlight: Style::default()
                    .add_modifier(Modifier::REVERSED | Modifier::BOLD),
                selection: bold,
                focused_border: bold,
                header: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Style of an author label.
    pub fn style_for_author(&self, author: Author) -> Style {
        match author {
            Author::User => self.user,
            Author::Bot => self.bot,
        }
    }

    /// Styles of the like and dislike controls for `feedback`.
    pub fn feedback_controls(&self, feedback: Feedback) -> (Style, Style) {
        match feedback {
            Feedback::None => (self.muted, self.muted),
            Feedback::Liked => (self.feedback_active, self.muted),
            Feedback::Disliked => (self.muted, self.feedback_active),
        }
    }
}

impl Default for MessageStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
