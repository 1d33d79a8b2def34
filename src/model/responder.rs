//! Bot response providers.
//!
//! The bot does not read the user's message. A reply is simply picked from a
//! fixed list. The provider is a trait so the event loop can be driven by a
//! deterministic script in tests, or by a real backend later.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::warn;

/// Canned bot replies.
pub const CANNED_RESPONSES: [&str; 5] = [
    "That's a very interesting point. I'll consider that.",
    "I'm afraid I don't have a direct answer for that.",
    "Could you please clarify what you mean?",
    "I'm still learning, but I appreciate your input!",
    "Thank you for that message. It's helpful.",
];

/// Source of bot reply text.
pub trait ResponseProvider {
    /// Produce the text of the next bot reply.
    fn pick_response(&mut self) -> String;
}

fn canned() -> Vec<String> {
    CANNED_RESPONSES.iter().map(|s| (*s).to_string()).collect()
}

// ===== RandomResponder =====

/// Picks uniformly at random from a list of replies.
#[derive(Debug, Clone)]
pub struct RandomResponder {
    rng: StdRng,
    responses: Vec<String>,
}

impl RandomResponder {
    /// Random responder over the canned replies, seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            responses: canned(),
        }
    }

    /// Random responder with a fixed seed, for reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            responses: canned(),
        }
    }

    /// Replace the reply list.
    ///
    /// An empty list keeps the canned replies.
    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        if responses.is_empty() {
            warn!("Empty response list supplied, keeping canned responses");
        } else {
            self.responses = responses;
        }
        self
    }

    /// The replies this responder draws from.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

impl Default for RandomResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseProvider for RandomResponder {
    fn pick_response(&mut self) -> String {
        self.responses
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

// ===== ScriptedResponder =====

/// Replays a fixed list of replies in order, wrapping at the end.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    script: Vec<String>,
    next: usize,
}

impl ScriptedResponder {
    /// Responder that cycles through `script`.
    ///
    /// An empty script replies with empty strings.
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl ResponseProvider for ScriptedResponder {
    fn pick_response(&mut self) -> String {
        if self.script.is_empty() {
            return String::new();
        }
        let reply = self.script[self.next % self.script.len()].clone();
        self.next = (self.next + 1) % self.script.len();
        reply
    }
}
