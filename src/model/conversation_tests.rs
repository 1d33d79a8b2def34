//! Tests for ConversationStore.

use super::*;
use crate::model::MessageBody;

// ===== Test Helpers =====

/// Store holding `texts` as settled bot messages at positions 0..n.
fn store_with_bot_messages(texts: &[&str]) -> ConversationStore {
    let mut store = ConversationStore::new();
    for text in texts {
        store.resolve_reply(text);
    }
    store
}

// ===== Construction =====

#[test]
fn new_store_is_empty() {
    let store = ConversationStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(!store.has_pending());
}

#[test]
fn default_store_opens_with_greeting() {
    let store = ConversationStore::default();

    assert_eq!(store.len(), 1);
    let greeting = store.get(0).expect("greeting");
    assert_eq!(greeting.text(), Some("Hello! Ask me anything."));
    assert!(!greeting.is_user());
    assert!(greeting.shows_feedback(), "Greeting accepts feedback");
}

#[test]
fn blank_greeting_yields_empty_store() {
    let store = ConversationStore::with_greeting("   ");

    assert!(store.is_empty());
}

// ===== append_user =====

#[test]
fn append_user_adds_trimmed_user_message() {
    let mut store = ConversationStore::new();

    let id = store.append_user("  hi there \n").expect("accepted");

    assert_eq!(store.len(), 1);
    let message = store.get_by_id(id).expect("stored");
    assert!(message.is_user());
    assert_eq!(message.text(), Some("hi there"));
}

#[test]
fn append_user_rejects_empty_text() {
    let mut store = ConversationStore::new();

    let result = store.append_user("");

    assert_eq!(result, Err(StoreError::EmptyMessage));
    assert_eq!(store.len(), 0, "Store should be unchanged");
}

#[test]
fn append_user_rejects_whitespace_only_text() {
    let mut store = ConversationStore::new();

    let result = store.append_user(" \t  ");

    assert_eq!(result, Err(StoreError::EmptyMessage));
    assert_eq!(store.len(), 0, "Store should be unchanged");
}

// ===== begin_reply / resolve_reply =====

#[test]
fn begin_reply_appends_pending_bot_placeholder() {
    let mut store = ConversationStore::new();
    store.append_user("hi").expect("accepted");

    let pending = store.begin_reply().expect("no reply in flight");

    assert_eq!(store.len(), 2);
    let placeholder = store.get(1).expect("placeholder");
    assert_eq!(placeholder.id(), pending);
    assert!(placeholder.is_pending());
    assert!(!placeholder.is_user());
    assert_eq!(store.pending_id(), Some(pending));
}

#[test]
fn begin_reply_twice_is_rejected() {
    let mut store = ConversationStore::new();
    let first = store.begin_reply().expect("first reply");

    let second = store.begin_reply();

    assert_eq!(second, Err(StoreError::ReplyAlreadyPending(first)));
    assert_eq!(store.len(), 1, "Only one placeholder may exist");
}

#[test]
fn resolve_reply_replaces_placeholder() {
    let mut store = ConversationStore::new();
    store.append_user("hi").expect("accepted");
    store.begin_reply().expect("no reply in flight");

    let id = store.resolve_reply("Could you please clarify what you mean?");

    assert_eq!(store.len(), 2);
    assert!(!store.has_pending());
    let reply = store.get(1).expect("reply");
    assert_eq!(reply.id(), id);
    assert_eq!(reply.text(), Some("Could you please clarify what you mean?"));
    assert!(!reply.liked());
    assert!(!reply.disliked());
    assert_eq!(reply.feedback_text(), None);
}

#[test]
fn resolve_reply_without_placeholder_appends_directly() {
    let mut store = ConversationStore::new();
    store.append_user("hi").expect("accepted");

    store.resolve_reply("direct");

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).and_then(Message::text), Some("direct"));
}

#[test]
fn resolve_reply_finds_placeholder_by_flag_not_position() {
    let mut store = ConversationStore::new();
    store.append_user("first").expect("accepted");
    let pending = store.begin_reply().expect("no reply in flight");
    // A message appended after the placeholder must not be removed instead.
    store.append_user("second").expect("accepted");

    store.resolve_reply("answer");

    let bodies: Vec<&MessageBody> = store.messages().iter().map(Message::body).collect();
    assert_eq!(
        bodies,
        vec![
            &MessageBody::Text("first".to_string()),
            &MessageBody::Text("second".to_string()),
            &MessageBody::Text("answer".to_string()),
        ]
    );
    assert_eq!(store.get_by_id(pending), None, "Placeholder is gone");
}

#[test]
fn begin_reply_allowed_again_after_resolution() {
    let mut store = ConversationStore::new();
    store.begin_reply().expect("first reply");
    store.resolve_reply("done");

    assert!(store.begin_reply().is_ok());
}

// ===== set_feedback =====

#[test]
fn like_sets_liked_and_feedback_text() {
    let mut store = store_with_bot_messages(&["hello"]);

    let feedback = store.set_feedback(0, FeedbackKind::Like).expect("bot message");

    assert_eq!(feedback, Feedback::Liked);
    let message = store.get(0).expect("message");
    assert!(message.liked());
    assert!(!message.disliked());
    assert_eq!(message.feedback_text(), Some("You liked this message"));
}

#[test]
fn like_twice_clears_feedback() {
    let mut store = store_with_bot_messages(&["hello"]);

    store.set_feedback(0, FeedbackKind::Like).expect("bot message");
    store.set_feedback(0, FeedbackKind::Like).expect("bot message");

    let message = store.get(0).expect("message");
    assert!(!message.liked());
    assert!(!message.disliked());
    assert_eq!(message.feedback_text(), None);
}

#[test]
fn dislike_after_like_switches_feedback() {
    let mut store = store_with_bot_messages(&["hello"]);

    store.set_feedback(0, FeedbackKind::Like).expect("bot message");
    store.set_feedback(0, FeedbackKind::Dislike).expect("bot message");

    let message = store.get(0).expect("message");
    assert!(!message.liked());
    assert!(message.disliked());
    assert_eq!(message.feedback_text(), Some("You disliked this message"));
}

#[test]
fn feedback_on_user_message_is_rejected() {
    let mut store = ConversationStore::new();
    let id = store.append_user("hi").expect("accepted");

    let result = store.set_feedback(0, FeedbackKind::Like);

    assert_eq!(result, Err(StoreError::FeedbackNotAllowed(id)));
    assert_eq!(store.get(0).map(Message::feedback), Some(Feedback::None));
}

#[test]
fn feedback_on_placeholder_is_rejected() {
    let mut store = ConversationStore::new();
    let pending = store.begin_reply().expect("no reply in flight");

    let result = store.set_feedback_by_id(pending, FeedbackKind::Dislike);

    assert_eq!(result, Err(StoreError::FeedbackNotAllowed(pending)));
}

#[test]
fn feedback_out_of_range_is_rejected() {
    let mut store = store_with_bot_messages(&["hello"]);

    let result = store.set_feedback(5, FeedbackKind::Like);

    assert_eq!(result, Err(StoreError::NoSuchPosition(5)));
}

#[test]
fn feedback_by_id_survives_placeholder_removal() {
    let mut store = ConversationStore::new();
    store.append_user("question").expect("accepted");
    store.begin_reply().expect("no reply in flight");
    let first_reply = {
        let id = store.resolve_reply("first answer");
        store.append_user("another").expect("accepted");
        store.begin_reply().expect("no reply in flight");
        id
    };

    store.resolve_reply("second answer");
    store
        .set_feedback_by_id(first_reply, FeedbackKind::Like)
        .expect("bot message");

    assert_eq!(
        store.get_by_id(first_reply).and_then(Message::text),
        Some("first answer")
    );
    assert!(store.get_by_id(first_reply).is_some_and(Message::liked));
}

#[test]
fn feedback_by_unknown_id_is_rejected() {
    let mut store = store_with_bot_messages(&["hello"]);

    let result = store.set_feedback_by_id(MessageId::new(999), FeedbackKind::Like);

    assert_eq!(result, Err(StoreError::NoSuchMessage(MessageId::new(999))));
}

// ===== Queries =====

#[test]
fn index_of_tracks_shifting_positions() {
    let mut store = ConversationStore::new();
    store.append_user("a").expect("accepted");
    store.begin_reply().expect("no reply in flight");
    let late = store.append_user("b").expect("accepted");
    assert_eq!(store.index_of(late), Some(2));

    store.resolve_reply("c");

    assert_eq!(store.index_of(late), Some(1), "Position shifts, id does not");
}

#[test]
fn ids_are_never_reused() {
    let mut store = ConversationStore::new();
    let pending = store.begin_reply().expect("no reply in flight");
    let reply = store.resolve_reply("x");

    assert_ne!(pending, reply);
    assert!(pending < reply);
}
