//! Message types for the conversation.
//!
//! A message is one conversational turn. Raw constructors are crate-private:
//! messages are only created by [`ConversationStore`](crate::model::ConversationStore),
//! which owns id allocation.

use crate::model::MessageId;
use chrono::{DateTime, Local};

/// Feedback text shown under a liked bot message.
pub const LIKED_FEEDBACK_TEXT: &str = "You liked this message";

/// Feedback text shown under a disliked bot message.
pub const DISLIKED_FEEDBACK_TEXT: &str = "You disliked this message";

// ===== Author =====

/// Who authored a message. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    /// Typed by the person at the keyboard.
    User,
    /// Produced by the response provider.
    Bot,
}

// ===== MessageBody =====

/// Content of a message.
///
/// Sum type: a message is either real text or the transient
/// "reply in progress" marker. Pending bodies carry no text and are never
/// searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Display text.
    Text(String),
    /// Placeholder while a reply is being generated.
    Pending,
}

// ===== Feedback =====

/// Which feedback button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// Thumbs up.
    Like,
    /// Thumbs down.
    Dislike,
}

/// Feedback state of a bot message.
///
/// Sum type enforces that a message is never liked and disliked at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    /// No feedback given.
    #[default]
    None,
    /// Liked by the user.
    Liked,
    /// Disliked by the user.
    Disliked,
}

impl Feedback {
    /// Apply a button press.
    ///
    /// Pressing the active kind clears it; pressing the other kind switches.
    pub fn toggle(self, kind: FeedbackKind) -> Self {
        match (self, kind) {
            (Feedback::Liked, FeedbackKind::Like) => Feedback::None,
            (Feedback::Disliked, FeedbackKind::Dislike) => Feedback::None,
            (_, FeedbackKind::Like) => Feedback::Liked,
            (_, FeedbackKind::Dislike) => Feedback::Disliked,
        }
    }

    /// Text describing the feedback, `None` when no feedback is set.
    pub fn text(self) -> Option<&'static str> {
        match self {
            Feedback::None => None,
            Feedback::Liked => Some(LIKED_FEEDBACK_TEXT),
            Feedback::Disliked => Some(DISLIKED_FEEDBACK_TEXT),
        }
    }
}

// ===== Message =====

/// One conversational turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    author: Author,
    body: MessageBody,
    feedback: Feedback,
    sent_at: DateTime<Local>,
}

impl Message {
    pub(crate) fn user(id: MessageId, text: String) -> Self {
        Self {
            id,
            author: Author::User,
            body: MessageBody::Text(text),
            feedback: Feedback::None,
            sent_at: Local::now(),
        }
    }

    pub(crate) fn bot(id: MessageId, text: String) -> Self {
        Self {
            id,
            author: Author::Bot,
            body: MessageBody::Text(text),
            feedback: Feedback::None,
            sent_at: Local::now(),
        }
    }

    pub(crate) fn pending(id: MessageId) -> Self {
        Self {
            id,
            author: Author::Bot,
            body: MessageBody::Pending,
            feedback: Feedback::None,
            sent_at: Local::now(),
        }
    }

    pub(crate) fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = feedback;
    }

    /// Stable identifier.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Message author.
    pub fn author(&self) -> Author {
        self.author
    }

    /// Message body.
    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Literal text, `None` for the pending placeholder.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text(text) => Some(text),
            MessageBody::Pending => None,
        }
    }

    /// Whether the user wrote this message.
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    /// Whether this is the "reply in progress" placeholder.
    pub fn is_pending(&self) -> bool {
        self.body == MessageBody::Pending
    }

    /// Current feedback state.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Whether the user liked this message.
    pub fn liked(&self) -> bool {
        self.feedback == Feedback::Liked
    }

    /// Whether the user disliked this message.
    pub fn disliked(&self) -> bool {
        self.feedback == Feedback::Disliked
    }

    /// Derived feedback description.
    pub fn feedback_text(&self) -> Option<&'static str> {
        self.feedback.text()
    }

    /// Whether the feedback row is rendered for this message.
    ///
    /// Only settled bot messages accept feedback.
    pub fn shows_feedback(&self) -> bool {
        self.author == Author::Bot && !self.is_pending()
    }

    /// Local time the message was created.
    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_from_none_sets_liked() {
        assert_eq!(Feedback::None.toggle(FeedbackKind::Like), Feedback::Liked);
    }

    #[test]
    fn toggle_like_twice_clears() {
        let feedback = Feedback::None
            .toggle(FeedbackKind::Like)
            .toggle(FeedbackKind::Like);
        assert_eq!(feedback, Feedback::None);
    }

    #[test]
    fn toggle_dislike_after_like_switches() {
        let feedback = Feedback::Liked.toggle(FeedbackKind::Dislike);
        assert_eq!(feedback, Feedback::Disliked);
    }

    #[test]
    fn toggle_like_after_dislike_switches() {
        let feedback = Feedback::Disliked.toggle(FeedbackKind::Like);
        assert_eq!(feedback, Feedback::Liked);
    }

    #[test]
    fn feedback_text_mirrors_state() {
        assert_eq!(Feedback::None.text(), None);
        assert_eq!(Feedback::Liked.text(), Some("You liked this message"));
        assert_eq!(Feedback::Disliked.text(), Some("You disliked this message"));
    }

    #[test]
    fn pending_message_has_no_text() {
        let message = Message::pending(MessageId::new(1));
        assert!(message.is_pending());
        assert_eq!(message.text(), None);
        assert!(!message.shows_feedback(), "Placeholder has no feedback row");
    }

    #[test]
    fn user_message_never_shows_feedback() {
        let message = Message::user(MessageId::new(1), "hi".to_string());
        assert!(message.is_user());
        assert!(!message.shows_feedback());
    }

    #[test]
    fn bot_message_starts_without_feedback() {
        let message = Message::bot(MessageId::new(2), "hello".to_string());
        assert!(message.shows_feedback());
        assert!(!message.liked());
        assert!(!message.disliked());
        assert_eq!(message.feedback_text(), None);
    }
}
