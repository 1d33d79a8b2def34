//! Acceptance tests for the chat session through the public API.
//!
//! Each test plays one user-visible scenario: the store, the scheduler and a
//! responder wired together the way the terminal shell wires them.

use chatbox::model::{
    ConversationStore, FeedbackKind, RandomResponder, ResponseProvider, ScriptedResponder,
    StoreError, CANNED_RESPONSES, LIKED_FEEDBACK_TEXT,
};
use chatbox::state::search::set_query;
use chatbox::state::{AppState, EmojiPickerState, ReplyScheduler};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(500);

fn empty_state() -> AppState {
    AppState::new(ConversationStore::new(), EmojiPickerState::default())
}

/// Drive the shell's send path: send, schedule, then fire at `now + DELAY`.
fn send_and_reply(
    state: &mut AppState,
    scheduler: &mut ReplyScheduler,
    responder: &mut dyn ResponseProvider,
    text: &str,
) {
    let start = Instant::now();
    state.composer.insert_str(text);
    let pending = state.send_message().unwrap();
    scheduler.schedule(pending, start);

    assert_eq!(scheduler.take_due(start), None, "not due before the delay");
    let due = scheduler.take_due(start + DELAY).expect("due after the delay");
    assert_eq!(due, pending);
    state.resolve_pending_reply(&responder.pick_response());
}

#[test]
fn hi_gets_a_canned_reply() {
    let mut state = empty_state();
    let mut scheduler = ReplyScheduler::new(DELAY);
    let mut responder = RandomResponder::with_seed(7);

    state.composer.insert_str("hi");
    let pending = state.send_message().unwrap();
    scheduler.schedule(pending, Instant::now());

    let messages = state.store().messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].is_user());
    assert_eq!(messages[0].text(), Some("hi"));
    assert!(messages[1].is_pending());

    let now = Instant::now() + DELAY;
    assert_eq!(scheduler.take_due(now), Some(pending));
    state.resolve_pending_reply(&responder.pick_response());

    let messages = state.store().messages();
    assert_eq!(messages.len(), 2);
    let reply = &messages[1];
    assert!(!reply.is_user());
    assert!(!reply.is_pending());
    assert!(CANNED_RESPONSES.iter().any(|canned| reply.text() == Some(*canned)));
    assert!(reply.shows_feedback());
    assert!(!reply.liked());
    assert!(!reply.disliked());
}

#[test]
fn blank_messages_are_ignored() {
    let mut state = empty_state();

    for blank in ["", "   "] {
        state.composer.clear();
        state.composer.insert_str(blank);
        assert_eq!(state.send_message(), Err(StoreError::EmptyMessage));
    }

    assert!(state.store().is_empty());
    assert_eq!(state.composer.text(), "   ", "input buffer unchanged");
}

#[test]
fn second_send_while_pending_is_refused() {
    let mut state = empty_state();
    state.composer.insert_str("first");
    let pending = state.send_message().unwrap();

    state.composer.insert_str("second");
    assert_eq!(
        state.send_message(),
        Err(StoreError::ReplyAlreadyPending(pending))
    );
    assert_eq!(state.store().len(), 2);
    assert_eq!(state.composer.text(), "second");
}

#[test]
fn like_then_like_again_clears() {
    let mut state = empty_state();
    let mut scheduler = ReplyScheduler::new(DELAY);
    let mut responder = ScriptedResponder::new(["Tell me more."]);
    send_and_reply(&mut state, &mut scheduler, &mut responder, "hello");

    state.select_prev_message();
    let reply = state.selected.unwrap();

    state.toggle_feedback_on_selected(FeedbackKind::Like);
    let message = state.store().get_by_id(reply).unwrap();
    assert!(message.liked());
    assert!(!message.disliked());
    assert_eq!(message.feedback_text(), Some(LIKED_FEEDBACK_TEXT));

    state.toggle_feedback_on_selected(FeedbackKind::Like);
    let message = state.store().get_by_id(reply).unwrap();
    assert!(!message.liked());
    assert!(!message.disliked());
    assert_eq!(message.feedback_text(), None);
}

#[test]
fn dislike_after_like_switches() {
    let mut store = ConversationStore::with_greeting("Hi there");

    store.set_feedback(0, FeedbackKind::Like).unwrap();
    store.set_feedback(0, FeedbackKind::Dislike).unwrap();

    let message = &store.messages()[0];
    assert!(!message.liked());
    assert!(message.disliked());
}

#[test]
fn feedback_on_user_message_is_refused() {
    let mut store = ConversationStore::new();
    store.append_user("mine").unwrap();

    assert!(matches!(
        store.set_feedback(0, FeedbackKind::Like),
        Err(StoreError::FeedbackNotAllowed(_))
    ));
    assert!(matches!(
        store.set_feedback(5, FeedbackKind::Like),
        Err(StoreError::NoSuchPosition(5))
    ));
    assert!(!store.messages()[0].liked());
}

#[test]
fn hello_search_matches_first_and_last_and_wraps() {
    let mut store = ConversationStore::new();
    for text in ["hello world", "goodbye", "Hello again"] {
        store.append_user(text).unwrap();
    }

    let mut search = set_query(&store, "hello");
    let positions: Vec<usize> = search.matches().iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![0, 2]);
    assert_eq!(search.current_match().map(|m| m.position), Some(0));

    search.advance();
    assert_eq!(search.current_match().map(|m| m.position), Some(2));
    search.advance();
    assert_eq!(search.current_match().map(|m| m.position), Some(0));
    search.retreat();
    assert_eq!(search.current_match().map(|m| m.position), Some(2));
}

#[test]
fn empty_query_has_no_cursor() {
    let store = ConversationStore::with_greeting("Hello! Ask me anything.");

    let search = set_query(&store, "");

    assert!(search.matches().is_empty());
    assert_eq!(search.current_match(), None);
    assert_eq!(search.current_index(), None);
}

#[test]
fn emoji_selection_appends_to_composer() {
    let mut state = empty_state();
    state.composer.insert_str("great ");

    state.toggle_emoji_picker();
    state.emoji_picker.move_right();
    state.emoji_picker.move_right();
    state.insert_selected_emoji();

    assert_eq!(state.composer.text(), "great 😄");
    assert!(!state.emoji_picker.is_visible());
}

#[test]
fn empty_palette_leaves_picker_closed() {
    let mut state = AppState::new(ConversationStore::new(), EmojiPickerState::new(Vec::new()));

    state.toggle_emoji_picker();
    state.insert_selected_emoji();

    assert!(!state.emoji_picker.is_visible());
    assert!(state.composer.is_empty());
}

#[test]
fn seeded_sessions_reply_identically() {
    let mut first = RandomResponder::with_seed(99);
    let mut second = RandomResponder::with_seed(99);

    let a: Vec<String> = (0..10).map(|_| first.pick_response()).collect();
    let b: Vec<String> = (0..10).map(|_| second.pick_response()).collect();

    assert_eq!(a, b);
}
