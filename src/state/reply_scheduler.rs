//! Deferred bot reply scheduling.
//!
//! The reply "latency" is a deadline checked by the event loop, not a
//! background thread. A scheduled reply is keyed to the id of the pending
//! placeholder it will replace, so a stale task can be detected and dropped
//! instead of resolving the wrong placeholder.

use crate::model::MessageId;
use std::time::{Duration, Instant};
use tracing::debug;

/// Delay between sending a message and the bot reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// A reply waiting for its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReply {
    /// Placeholder this reply will replace.
    pub pending_id: MessageId,
    /// When the reply becomes due.
    pub due_at: Instant,
}

/// Holds at most one scheduled reply.
#[derive(Debug, Clone)]
pub struct ReplyScheduler {
    delay: Duration,
    scheduled: Option<ScheduledReply>,
}

impl ReplyScheduler {
    /// Scheduler using `delay` for every reply.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            scheduled: None,
        }
    }

    /// Configured reply delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The currently scheduled reply.
    pub fn scheduled(&self) -> Option<ScheduledReply> {
        self.scheduled
    }

    /// Whether a reply is waiting.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Schedule the reply for `pending_id`, due `delay` after `now`.
    ///
    /// Replaces any previously scheduled reply.
    pub fn schedule(&mut self, pending_id: MessageId, now: Instant) -> ScheduledReply {
        let reply = ScheduledReply {
            pending_id,
            due_at: now + self.delay,
        };
        if let Some(previous) = self.scheduled.replace(reply) {
            debug!(replaced = %previous.pending_id, "Replacing scheduled reply");
        }
        debug!(%pending_id, delay_ms = self.delay.as_millis() as u64, "Reply scheduled");
        reply
    }

    /// Take the scheduled reply if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<MessageId> {
        match self.scheduled {
            Some(reply) if reply.due_at <= now => {
                self.scheduled = None;
                Some(reply.pending_id)
            }
            _ => None,
        }
    }

    /// Time left until the scheduled reply is due. Zero when overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.scheduled
            .map(|reply| reply.due_at.saturating_duration_since(now))
    }

    /// Drop the scheduled reply, returning the placeholder it was keyed to.
    pub fn cancel(&mut self) -> Option<MessageId> {
        let cancelled = self.scheduled.take().map(|reply| reply.pending_id);
        if let Some(id) = cancelled {
            debug!(pending_id = %id, "Scheduled reply cancelled");
        }
        cancelled
    }
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}
