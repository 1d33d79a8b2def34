//! chatbox
//!
//! Terminal chat widget: a scrollable conversation with a canned-reply bot,
//! per-message like/dislike feedback, an emoji picker and in-conversation
//! search with match navigation.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state` are
//! plain data and transitions, `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
