//! Error types for chatbox.
//!
//! # Error Hierarchy
//!
//! - [`StoreError`] - rejected conversation store operations. These are policy
//!   no-ops: the store is left unchanged and the UI logs and ignores them.
//! - [`AppError`] - top-level fatal errors returned from the binary's run
//!   function (configuration, logging setup, terminal).

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::MessageId;
use crate::view::TuiError;
use thiserror::Error;

/// A conversation store operation that was refused.
///
/// Every variant guarantees the store was not modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Submitted text was empty after trimming.
    #[error("Message is empty")]
    EmptyMessage,

    /// A reply placeholder already exists; only one reply may be in flight.
    #[error("A reply is already pending ({0})")]
    ReplyAlreadyPending(MessageId),

    /// No message at the given position.
    #[error("No message at position {0}")]
    NoSuchPosition(usize),

    /// No message with the given id.
    #[error("No message with id {0}")]
    NoSuchMessage(MessageId),

    /// Feedback targets settled bot messages only.
    #[error("Message {0} does not accept feedback")]
    FeedbackNotAllowed(MessageId),
}

/// Top-level application error encompassing all fatal failure modes.
///
/// Store rejections are not part of this type; they never abort the session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file or tracing subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
