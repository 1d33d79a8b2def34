//! Search state machine.
//!
//! SearchState is a sum type representing the possible search states:
//! - Inactive: no query (cursor "none")
//! - Active with matches: cursor points into the match sequence
//! - Active without matches: cursor "none"
//!
//! Matching is a case-insensitive substring test against each message's
//! literal text. The match sequence holds one entry per matching message in
//! ascending store order; ties are never ranked.

use crate::model::{ConversationStore, MessageId};
use std::ops::Range;

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No query.
    #[default]
    Inactive,
    /// Query evaluated against the store.
    Active {
        /// The query that produced `matches`.
        query: SearchQuery,
        /// Matching messages in store order. May be empty.
        matches: Vec<SearchMatch>,
        /// Index into `matches`. Meaningless when `matches` is empty.
        current_match: usize,
    },
}

impl SearchState {
    /// Whether a query is set.
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Active { .. })
    }

    /// The active query, if any.
    pub fn query(&self) -> Option<&SearchQuery> {
        match self {
            SearchState::Active { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }

    /// The match sequence. Empty when inactive.
    pub fn matches(&self) -> &[SearchMatch] {
        match self {
            SearchState::Active { matches, .. } => matches,
            SearchState::Inactive => &[],
        }
    }

    /// Position of the cursor in the match sequence, `None` when there is
    /// nothing to point at.
    pub fn current_index(&self) -> Option<usize> {
        match self {
            SearchState::Active {
                matches,
                current_match,
                ..
            } if !matches.is_empty() => Some(*current_match),
            _ => None,
        }
    }

    /// The match under the cursor.
    pub fn current_match(&self) -> Option<&SearchMatch> {
        self.current_index().and_then(|i| self.matches().get(i))
    }

    /// The match entry for a message, if the message matches.
    pub fn match_for(&self, id: MessageId) -> Option<&SearchMatch> {
        self.matches().iter().find(|m| m.message_id == id)
    }

    /// Move the cursor to the next match, wrapping from last to first.
    ///
    /// No-op when inactive or without matches.
    pub fn advance(&mut self) {
        if let SearchState::Active {
            matches,
            current_match,
            ..
        } = self
        {
            if matches.is_empty() {
                return;
            }
            *current_match = if *current_match + 1 >= matches.len() {
                0
            } else {
                *current_match + 1
            };
        }
    }

    /// Move the cursor to the previous match, wrapping from first to last.
    ///
    /// No-op when inactive or without matches.
    pub fn retreat(&mut self) {
        if let SearchState::Active {
            matches,
            current_match,
            ..
        } = self
        {
            if matches.is_empty() {
                return;
            }
            *current_match = if *current_match == 0 {
                matches.len() - 1
            } else {
                *current_match - 1
            };
        }
    }

    /// Re-run the active query against `store`.
    ///
    /// The cursor stays on the same message when it still matches, otherwise
    /// it resets to the first match.
    pub fn refreshed(&self, store: &ConversationStore) -> SearchState {
        let SearchState::Active { query, .. } = self else {
            return SearchState::Inactive;
        };

        let previous = self.current_match().map(|m| m.message_id);
        let matches = execute_search(store, query);
        let current_match = previous
            .and_then(|id| matches.iter().position(|m| m.message_id == id))
            .unwrap_or(0);

        SearchState::Active {
            query: query.clone(),
            matches,
            current_match,
        }
    }
}

// ===== SearchQuery =====

/// Validated search query. Never blank.
/// Smart constructor enforces the non-blank invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== SearchMatch =====

/// A message that contains the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Matching message.
    pub message_id: MessageId,
    /// Store position of the message when the search ran.
    pub position: usize,
    /// Byte ranges of each non-overlapping occurrence in the message text.
    pub ranges: Vec<Range<usize>>,
}

// ===== Search Execution =====

/// Evaluate `raw` against the store.
///
/// A blank term yields [`SearchState::Inactive`]. Otherwise the cursor starts
/// on the first match.
pub fn set_query(store: &ConversationStore, raw: &str) -> SearchState {
    match SearchQuery::new(raw) {
        Some(query) => {
            let matches = execute_search(store, &query);
            SearchState::Active {
                query,
                matches,
                current_match: 0,
            }
        }
        None => SearchState::Inactive,
    }
}

/// Find every message whose text contains `query`, ignoring case.
///
/// Pending placeholders have no text and never match.
pub fn execute_search(store: &ConversationStore, query: &SearchQuery) -> Vec<SearchMatch> {
    let query_lower: String = query.as_str().chars().flat_map(fold_case).collect();

    store
        .messages()
        .iter()
        .enumerate()
        .filter_map(|(position, message)| {
            let text = message.text()?;
            let ranges = find_occurrences(text, &query_lower);
            (!ranges.is_empty()).then(|| SearchMatch {
                message_id: message.id(),
                position,
                ranges,
            })
        })
        .collect()
}

/// Case folding applied to both query and text, one char at a time.
///
/// Final sigma folds to 'σ' so "ΟΔΟΣ", "οδοσ" and "οδος" all compare equal;
/// 'ς' and 'σ' have the same UTF-8 length, so byte offsets are unaffected.
fn fold_case(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Byte ranges in `text` of non-overlapping, case-insensitive occurrences
/// of `query_lower`.
///
/// Lowercasing can change byte lengths ('İ' becomes two chars), so offsets
/// found in the lowercased text are mapped back to the original.
fn find_occurrences(text: &str, query_lower: &str) -> Vec<Range<usize>> {
    if query_lower.is_empty() {
        return Vec::new();
    }

    let mut lower = String::with_capacity(text.len());
    // origin[i] = byte offset in `text` of the char that produced lower[i]
    let mut origin = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for lower_ch in fold_case(ch) {
            lower.push(lower_ch);
            origin.resize(lower.len(), offset);
        }
    }

    let map_end = |end: usize| -> usize {
        if end >= lower.len() {
            text.len()
        } else {
            origin[end]
        }
    };

    let mut ranges = Vec::new();
    let mut start = 0;
    while let Some(pos) = lower[start..].find(query_lower) {
        let match_start = start + pos;
        let match_end = match_start + query_lower.len();
        let range = origin[match_start]..map_end(match_end);
        if !range.is_empty() {
            ranges.push(range);
        }
        start = match_end;
    }
    ranges
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
