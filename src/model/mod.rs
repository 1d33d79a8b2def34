//! Domain model types (pure).
//!
//! The conversation store and everything it holds. Nothing in this module
//! touches the terminal.

pub mod conversation;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod message;
pub mod responder;

// Re-export for convenience
pub use conversation::{ConversationStore, DEFAULT_GREETING};
pub use error::{AppError, StoreError};
pub use identifiers::MessageId;
pub use key_action::KeyAction;
pub use message::{
    Author, DISLIKED_FEEDBACK_TEXT, Feedback, FeedbackKind, LIKED_FEEDBACK_TEXT, Message,
    MessageBody,
};
pub use responder::{CANNED_RESPONSES, RandomResponder, ResponseProvider, ScriptedResponder};
