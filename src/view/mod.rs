//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod emoji_picker;
mod help;
pub mod layout;
pub mod message;
mod search_input;
mod styles;

pub use emoji_picker::EmojiPicker;
pub use help::render_help_overlay;
pub use layout::{render_layout, AppLayout};
pub use message::{wrap_ranges, ConversationLayout, ConversationView};
pub use search_input::{line_with_cursor, TextBox};
pub use styles::{ColorConfig, MessageStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{
    ConversationStore, FeedbackKind, KeyAction, RandomResponder, ResponseProvider,
};
use crate::state::{
    handle_scroll_action, next_match, prev_match, search_input_handler, AppState,
    EmojiPickerState, FocusPane, ReplyScheduler,
};
use constants::EVENT_POLL_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup options that only affect the first frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Disable colors (`--no-color`).
    pub no_color: bool,
    /// Open with this search query (`--search`).
    pub search: Option<String>,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    responder: Box<dyn ResponseProvider>,
    scheduler: ReplyScheduler,
    styles: MessageStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen.
    pub fn new(config: &ResolvedConfig, options: &LaunchOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let responder = match config.seed {
            Some(seed) => RandomResponder::with_seed(seed),
            None => RandomResponder::new(),
        }
        .with_responses(config.responses.clone());

        let mut app = Self::with_terminal(
            terminal,
            initial_state(config),
            Box::new(responder),
            ReplyScheduler::new(config.reply_delay()),
            MessageStyles::with_color_config(ColorConfig::from_env_and_args(options.no_color)),
        );

        if let Some(query) = &options.search {
            app.start_search(query);
        }
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Blocks in `event::poll` until a key
    /// arrives or the scheduled reply falls due.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;

            let timeout = self
                .scheduler
                .time_until_due(Instant::now())
                .map_or(EVENT_POLL_INTERVAL, |due| due.min(EVENT_POLL_INTERVAL));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }

            self.fire_due_reply(Instant::now());
        }
    }
}

/// Conversation state for a fresh session under `config`.
pub fn initial_state(config: &ResolvedConfig) -> AppState {
    let mut state = AppState::new(
        ConversationStore::with_greeting(&config.greeting),
        EmojiPickerState::new(config.emoji_palette.clone()),
    );
    if config.show_search_bar {
        state.toggle_search_bar();
        state.focus = FocusPane::Input;
    }
    state
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an application on any backend.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        responder: Box<dyn ResponseProvider>,
        scheduler: ReplyScheduler,
        styles: MessageStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            responder,
            scheduler,
            styles,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The reply scheduler.
    pub fn scheduler(&self) -> &ReplyScheduler {
        &self.scheduler
    }

    /// Show the search bar with `query` already entered.
    pub fn start_search(&mut self, query: &str) {
        if !self.app_state.search_bar_visible {
            self.app_state.toggle_search_bar();
        }
        self.app_state.search_input.clear();
        self.app_state.search_input.insert_str(query);
        self.app_state.update_search_query();
    }

    /// Resolve the scheduled reply if it is due at `now`.
    ///
    /// A reply whose placeholder is no longer pending is dropped. Returns
    /// whether a bot message was added.
    pub fn fire_due_reply(&mut self, now: Instant) -> bool {
        let Some(scheduled_id) = self.scheduler.take_due(now) else {
            return false;
        };

        if self.app_state.store().pending_id() != Some(scheduled_id) {
            warn!(%scheduled_id, "Dropping stale scheduled reply");
            return false;
        }

        let text = self.responder.pick_response();
        self.app_state.resolve_pending_reply(&text);
        true
    }

    /// Cancel any scheduled reply before the application goes away.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.scheduler.cancel() {
            info!(pending_id = %id, "Cancelled scheduled reply on exit");
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C always quits, whatever has focus.
        if ctrl && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.app_state.help_visible = false;
            }
            return false;
        }

        match key.code {
            KeyCode::Char('f') if ctrl => {
                self.app_state.toggle_search_bar();
                return false;
            }
            KeyCode::Char('e') if ctrl => {
                self.app_state.toggle_emoji_picker();
                return false;
            }
            KeyCode::F(1) => {
                self.app_state.help_visible = true;
                return false;
            }
            KeyCode::Tab => {
                self.app_state.cycle_focus();
                return false;
            }
            KeyCode::Esc => {
                self.handle_escape();
                return false;
            }
            _ => {}
        }

        match self.app_state.focus {
            FocusPane::Input => self.handle_input_key(key),
            FocusPane::Conversation => return self.handle_conversation_key(key),
            FocusPane::Search => self.handle_search_key(key),
            FocusPane::EmojiPicker => self.handle_emoji_key(key),
        }
        false
    }

    fn handle_escape(&mut self) {
        let state = &mut self.app_state;
        match state.focus {
            FocusPane::EmojiPicker => state.toggle_emoji_picker(),
            FocusPane::Search => state.toggle_search_bar(),
            FocusPane::Conversation => state.focus = FocusPane::Input,
            FocusPane::Input => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::PageUp | KeyCode::PageDown) {
            let action = if key.code == KeyCode::PageUp {
                KeyAction::PageUp
            } else {
                KeyAction::PageDown
            };
            handle_scroll_action(&mut self.app_state, action);
            return;
        }

        // The composer is disabled while a reply is in flight.
        if self.app_state.is_reply_pending() {
            return;
        }

        if key.code == KeyCode::Enter {
            self.send_message();
            return;
        }

        let composer = &mut self.app_state.composer;
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                composer.insert_char(ch);
            }
            KeyCode::Backspace => {
                composer.backspace();
            }
            KeyCode::Delete => {
                composer.delete();
            }
            KeyCode::Left => composer.move_left(),
            KeyCode::Right => composer.move_right(),
            KeyCode::Home => composer.move_home(),
            KeyCode::End => composer.move_end(),
            _ => {}
        }
    }

    fn send_message(&mut self) {
        match self.app_state.send_message() {
            Ok(pending_id) => {
                self.scheduler.schedule(pending_id, Instant::now());
            }
            Err(err) => debug!(%err, "Send ignored"),
        }
    }

    fn handle_conversation_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        let feedback = match action {
            KeyAction::Like => Some(FeedbackKind::Like),
            KeyAction::Dislike => Some(FeedbackKind::Dislike),
            _ => None,
        };
        if let Some(kind) = feedback {
            self.apply_feedback(kind);
            return false;
        }

        let state = &mut self.app_state;
        match action {
            KeyAction::SelectNext => state.select_next_message(),
            KeyAction::SelectPrev => state.select_prev_message(),
            KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => handle_scroll_action(state, action),
            KeyAction::Like | KeyAction::Dislike => {}
            KeyAction::ToggleSearch => {
                if state.search_bar_visible {
                    state.focus = FocusPane::Search;
                } else {
                    state.toggle_search_bar();
                }
            }
            KeyAction::NextMatch => next_match(state),
            KeyAction::PrevMatch => prev_match(state),
            KeyAction::ToggleEmojiPicker => state.toggle_emoji_picker(),
            KeyAction::FocusInput => state.focus = FocusPane::Input,
            KeyAction::CycleFocus => state.cycle_focus(),
            KeyAction::Help => state.help_visible = true,
            KeyAction::Quit => return true,
        }
        false
    }

    fn apply_feedback(&mut self, kind: FeedbackKind) {
        match self.app_state.toggle_feedback_on_selected(kind) {
            Some(Ok(feedback)) => debug!(?feedback, "Feedback toggled"),
            Some(Err(err)) => debug!(%err, "Feedback ignored"),
            None => debug!("Feedback ignored, nothing selected"),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(state, ch);
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(state),
            KeyCode::Delete => search_input_handler::handle_delete(state),
            KeyCode::Left => search_input_handler::handle_cursor_left(state),
            KeyCode::Right => search_input_handler::handle_cursor_right(state),
            KeyCode::Home => search_input_handler::handle_home(state),
            KeyCode::End => search_input_handler::handle_end(state),
            KeyCode::Enter | KeyCode::Down => search_input_handler::submit_search(state),
            KeyCode::Up => prev_match(state),
            _ => {}
        }
    }

    fn handle_emoji_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Left => state.emoji_picker.move_left(),
            KeyCode::Right => state.emoji_picker.move_right(),
            KeyCode::Up => state.emoji_picker.move_up(),
            KeyCode::Down => state.emoji_picker.move_down(),
            KeyCode::Enter => state.insert_selected_emoji(),
            _ => {}
        }
    }

    /// Render the current frame
    ///
    /// Lays out the conversation for the current width, resolves the
    /// scroll position against it, then draws.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let inner = AppLayout::calculate(area, &self.app_state).conversation_inner();

        let conversation = ConversationLayout::build(&self.app_state, inner.width, &self.styles);
        self.app_state.scroll.resolve(
            conversation.height(),
            usize::from(inner.height),
            |id| conversation.span_of(id),
        );

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, &conversation, styles);
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, options: &LaunchOptions) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(config, options) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal()?;
            return Err(err);
        }
    };

    info!(delay_ms = config.reply_delay_ms, "Chat session started");
    let result = app.run();
    app.shutdown();

    restore_terminal()?;
    info!("Chat session ended");
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
