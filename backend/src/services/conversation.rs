//! Per-session conversation memory
//!
//! Keeps recent user and assistant messages so follow-up questions have
//! context. Bounded per session; the oldest messages go first.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::external::ChatMessage;

/// Session to message history mapping
///
/// Histories hold whole exchanges only, so an odd message bound is rounded
/// down and a user turn is never dropped while its reply is kept.
#[derive(Clone)]
pub struct ConversationStore {
    histories: Arc<RwLock<HashMap<String, Vec<ChatMessage>>>>,
    max_messages: usize,
}

impl ConversationStore {
    pub fn new(max_messages: usize) -> Self {
        Self {
            histories: Arc::new(RwLock::new(HashMap::new())),
            max_messages: max_messages - max_messages % 2,
        }
    }

    /// Snapshot of a session's history, oldest first
    pub fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        self.histories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Record one exchange
    pub fn record_exchange(&self, session_id: &str, user: ChatMessage, assistant: ChatMessage) {
        let mut histories = self.histories.write().unwrap_or_else(PoisonError::into_inner);
        let history = histories.entry(session_id.to_string()).or_default();
        history.push(user);
        history.push(assistant);

        if history.len() > self.max_messages {
            let excess = history.len() - self.max_messages;
            history.drain(..excess);
        }
    }

    /// Number of sessions with at least one exchange
    pub fn session_count(&self) -> usize {
        self.histories.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
