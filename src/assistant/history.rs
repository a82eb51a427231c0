use chrono::Utc;
use uuid::Uuid;

use crate::models::SearchHistoryItem;

/// Number of searches retained per session
pub const HISTORY_LIMIT: usize = 10;

/// Bounded, newest-first list of past searches
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    items: Vec<SearchHistoryItem>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a search, dropping the oldest once the limit is exceeded
    pub fn record(&mut self, query: &str) -> &SearchHistoryItem {
        let item = SearchHistoryItem {
            id: Uuid::new_v4().to_string(),
            query: query.to_string(),
            timestamp: Utc::now(),
        };
        self.items.insert(0, item);
        self.items.truncate(HISTORY_LIMIT);
        &self.items[0]
    }

    pub fn items(&self) -> &[SearchHistoryItem] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
