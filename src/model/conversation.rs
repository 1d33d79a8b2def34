//! Conversation store.
//!
//! Owns the canonical, append-only list of messages. The only removal ever
//! performed is of the pending reply placeholder; every other change is an
//! append or an in-place feedback edit.

use crate::model::{Feedback, FeedbackKind, Message, MessageId, StoreError};
use tracing::debug;

/// Greeting the bot opens every session with.
pub const DEFAULT_GREETING: &str = "Hello! Ask me anything.";

/// Ordered message list for one UI session.
///
/// # Invariants
///
/// - Messages are kept in append order and never reordered.
/// - At most one pending placeholder exists.
/// - Ids are unique and strictly increasing along the list.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl ConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId::new(1),
        }
    }

    /// Create a store opened with a bot greeting.
    ///
    /// An empty or whitespace-only greeting yields an empty store.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut store = Self::new();
        let greeting = greeting.trim();
        if !greeting.is_empty() {
            store.resolve_reply(greeting);
        }
        store
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    // ===== Mutations =====

    /// Append a user message.
    ///
    /// The stored text is trimmed.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyMessage`] if `text` is empty after trimming.
    pub fn append_user(&mut self, text: &str) -> Result<MessageId, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyMessage);
        }

        let id = self.allocate_id();
        self.messages.push(Message::user(id, text.to_string()));
        debug!(%id, len = self.messages.len(), "Appended user message");
        Ok(id)
    }

    /// Append the pending reply placeholder.
    ///
    /// # Errors
    ///
    /// [`StoreError::ReplyAlreadyPending`] if a placeholder already exists.
    pub fn begin_reply(&mut self) -> Result<MessageId, StoreError> {
        if let Some(pending) = self.pending_id() {
            return Err(StoreError::ReplyAlreadyPending(pending));
        }

        let id = self.allocate_id();
        self.messages.push(Message::pending(id));
        debug!(%id, "Reply placeholder added");
        Ok(id)
    }

    /// Replace the pending placeholder with a bot message.
    ///
    /// The placeholder is located by its pending flag, not by position. With
    /// no placeholder present the bot message is appended directly.
    pub fn resolve_reply(&mut self, text: &str) -> MessageId {
        if let Some(position) = self.messages.iter().position(Message::is_pending) {
            let removed = self.messages.remove(position);
            debug!(placeholder = %removed.id(), "Reply placeholder removed");
        }

        let id = self.allocate_id();
        self.messages.push(Message::bot(id, text.to_string()));
        debug!(%id, len = self.messages.len(), "Appended bot message");
        id
    }

    /// Toggle feedback on the message at `position`.
    ///
    /// Returns the new feedback state.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NoSuchPosition`] if `position` is out of range
    /// - [`StoreError::FeedbackNotAllowed`] for user messages and the placeholder
    pub fn set_feedback(
        &mut self,
        position: usize,
        kind: FeedbackKind,
    ) -> Result<Feedback, StoreError> {
        let message = self
            .messages
            .get_mut(position)
            .ok_or(StoreError::NoSuchPosition(position))?;
        toggle_feedback(message, kind)
    }

    /// Toggle feedback on the message with `id`.
    ///
    /// Preferred over [`set_feedback`](Self::set_feedback) by the UI: ids stay
    /// valid while positions shift under a resolving reply.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NoSuchMessage`] if no message has `id`
    /// - [`StoreError::FeedbackNotAllowed`] for user messages and the placeholder
    pub fn set_feedback_by_id(
        &mut self,
        id: MessageId,
        kind: FeedbackKind,
    ) -> Result<Feedback, StoreError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or(StoreError::NoSuchMessage(id))?;
        toggle_feedback(message, kind)
    }

    // ===== Queries =====

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Message at `position`.
    pub fn get(&self, position: usize) -> Option<&Message> {
        self.messages.get(position)
    }

    /// Message with `id`.
    pub fn get_by_id(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    /// Current position of the message with `id`.
    pub fn index_of(&self, id: MessageId) -> Option<usize> {
        // Ids increase along the list, so binary search is valid.
        self.messages.binary_search_by_key(&id, Message::id).ok()
    }

    /// Number of messages, placeholder included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Id of the pending placeholder, if any.
    pub fn pending_id(&self) -> Option<MessageId> {
        self.messages.iter().find(|m| m.is_pending()).map(Message::id)
    }

    /// Whether a reply is in flight.
    pub fn has_pending(&self) -> bool {
        self.pending_id().is_some()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }
}

fn toggle_feedback(message: &mut Message, kind: FeedbackKind) -> Result<Feedback, StoreError> {
    if !message.shows_feedback() {
        return Err(StoreError::FeedbackNotAllowed(message.id()));
    }

    let feedback = message.feedback().toggle(kind);
    message.set_feedback(feedback);
    debug!(id = %message.id(), ?feedback, "Feedback updated");
    Ok(feedback)
}

// ===== Tests =====

#[cfg(test)]
#[path = "conversation_tests.rs"]
mod tests;
