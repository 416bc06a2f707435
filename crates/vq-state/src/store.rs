//! Result store
//!
//! Holds the canonical latest [`QueryResult`]. An applied response fully
//! replaces the previous value field by field (the or-default rule lives in
//! `QueryResult::from`); there is no deep merge and no pub/sub layer —
//! callers re-render after `apply` returns.
//!
//! Overlapping queries are serialized by ticket: each request takes a
//! monotonically increasing [`Ticket`], and only the latest-issued ticket
//! may apply its response. A late arrival from an older request is dropped.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use vq_model::{ConversationTurn, QueryResponse, QueryResult};

/// Conversation turns kept and replayed as context
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Ordering token for one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Single source of truth for the latest query outcome
#[derive(Debug)]
pub struct ResultStore {
    current: RwLock<QueryResult>,
    history: Mutex<VecDeque<ConversationTurn>>,
    history_limit: usize,
    last_issued: AtomicU64,
}

impl ResultStore {
    /// Create a store with the default history cap
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a store keeping at most `limit` conversation turns
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            current: RwLock::new(QueryResult::default()),
            history: Mutex::new(VecDeque::new()),
            history_limit: limit,
            last_issued: AtomicU64::new(0),
        }
    }

    /// Issue the ticket for a new request; newer tickets supersede older ones
    pub fn issue_ticket(&self) -> Ticket {
        Ticket(self.last_issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replace the canonical result unconditionally
    pub fn apply(&self, response: QueryResponse) {
        *self.current.write() = QueryResult::from(response);
    }

    /// Replace the canonical result iff `ticket` is the latest issued
    ///
    /// Returns whether the response was applied. A stale response leaves
    /// the store untouched.
    pub fn apply_if_latest(&self, ticket: Ticket, response: QueryResponse) -> bool {
        if ticket.0 != self.last_issued.load(Ordering::SeqCst) {
            tracing::info!("dropping stale response for superseded request {}", ticket.0);
            return false;
        }
        self.apply(response);
        true
    }

    /// Snapshot of the canonical result
    #[must_use]
    pub fn current(&self) -> QueryResult {
        self.current.read().clone()
    }

    /// Append one conversation turn, evicting the oldest past the cap
    pub fn append_turn(&self, query: impl Into<String>, response_text: impl Into<String>) {
        let mut history = self.history.lock();
        history.push_back(ConversationTurn::new(query, response_text));
        while history.len() > self.history_limit {
            history.pop_front();
        }
    }

    /// The retained conversation history, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.history.lock().iter().cloned().collect()
    }

    /// The configured history cap
    #[inline]
    #[must_use]
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
