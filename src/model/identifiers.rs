//! Core identifier newtypes.
//!
//! Message identifiers are allocated by the conversation store from a
//! monotonically increasing counter. They are never reused within a session,
//! so a reference held across a store mutation never points at a different
//! message.

use std::fmt;

/// Stable identifier for a message within a conversation session.
///
/// Positions shift when the pending placeholder is removed; ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    /// Wrap a raw id value.
    ///
    /// The store is the only allocator of live ids; this constructor exists
    /// so callers can name ids in lookups and tests.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== Tests =====
