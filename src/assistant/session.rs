//! Search session state for the assistant screen.
//!
//! A submitted search becomes ready after a fixed delay that imitates a network round trip.
//! Every submission gets a new generation number and replaces the pending search, so a
//! superseded search can never publish its result.

use std::time::{Duration, Instant};

use tracing::debug;

use super::history::SearchHistory;
use super::synthesizer::synthesize;
use crate::models::AnswerResult;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    generation: u64,
    query: String,
    ready_at: Instant,
}

#[derive(Debug)]
pub struct SearchSession {
    query: String,
    result: Option<AnswerResult>,
    pending: Option<PendingSearch>,
    history: SearchHistory,
    delay: Duration,
    generation: u64,
}

impl SearchSession {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            result: None,
            pending: None,
            history: SearchHistory::new(),
            delay,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the current query.
    ///
    /// Blank queries are ignored and return `None`. Otherwise the search is recorded in the
    /// history, the previous result is discarded and any pending search is superseded.
    /// Returns the generation number of the new pending search.
    pub fn submit(&mut self, now: Instant) -> Option<u64> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            debug!("empty query, skipping search");
            return None;
        }

        let query = trimmed.to_string();
        self.history.record(&query);
        self.result = None;
        self.generation += 1;

        if let Some(stale) = self.pending.take() {
            debug!(generation = stale.generation, "superseded pending search");
        }
        debug!(generation = self.generation, query = %query, "search submitted");

        self.pending =
            Some(PendingSearch { generation: self.generation, query, ready_at: now + self.delay });
        Some(self.generation)
    }

    /// Resolve the pending search if its delay has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<&AnswerResult> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.ready_at);
        if !due {
            return None;
        }

        let pending = self.pending.take()?;
        debug!(generation = pending.generation, "search completed");
        self.result = Some(synthesize(&pending.query));
        self.result.as_ref()
    }

    /// Drop the pending search without producing a result
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Replace the query with a suggestion and discard the current answer.
    /// Does not start a search.
    pub fn choose_suggestion(&mut self, suggestion: &str) {
        debug!(suggestion, "suggestion chosen");
        self.query = suggestion.to_string();
        self.result = None;
    }
}
