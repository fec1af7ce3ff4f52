//! In-memory conversation history, keyed by WhatsApp user id.
//!
//! Each user gets a sliding window of the most recent turns. The window is
//! what gets replayed to the language model, so its size bounds both prompt
//! cost and how far back the bot can "remember". Histories live only as long
//! as the process: a restart starts every conversation fresh.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Maximum turns retained (and replayed) per user.
pub const MAX_HISTORY_TURNS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Conversation store lock poisoned")]
    LockPoisoned,
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Per-user sliding windows of recent turns.
pub struct ConversationStore {
    max_turns: usize,
    histories: RwLock<HashMap<String, VecDeque<Turn>>>,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(MAX_HISTORY_TURNS)
    }
}

impl ConversationStore {
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            histories: RwLock::new(HashMap::new()),
        }
    }

    /// Append a turn, evicting the oldest once the window is full.
    pub fn append(&self, user_id: &str, turn: Turn) -> Result<(), StoreError> {
        let mut histories = self.histories.write().map_err(|_| StoreError::LockPoisoned)?;
        let history = histories.entry(user_id.to_string()).or_default();
        history.push_back(turn);
        while history.len() > self.max_turns {
            history.pop_front();
        }
        Ok(())
    }

    /// Snapshot of a user's window, oldest first. Unknown users get an
    /// empty history rather than an error.
    pub fn history(&self, user_id: &str) -> Result<Vec<Turn>, StoreError> {
        let histories = self.histories.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(histories
            .get(user_id)
            .map(|h| h.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Drop a user's history entirely. Idempotent.
    pub fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        let mut histories = self.histories.write().map_err(|_| StoreError::LockPoisoned)?;
        histories.remove(user_id);
        Ok(())
    }

    /// Number of turns currently held for a user.
    pub fn len(&self, user_id: &str) -> Result<usize, StoreError> {
        let histories = self.histories.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(histories.get(user_id).map(|h| h.len()).unwrap_or(0))
    }

    /// Number of users with at least one stored turn.
    pub fn user_count(&self) -> Result<usize, StoreError> {
        let histories = self.histories.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(histories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ConversationStore {
        ConversationStore::default()
    }

    #[test]
    fn append_and_history_round_trip() {
        let store = store();
        store.append("u1", Turn::new(Role::User, "oi")).unwrap();
        store
            .append("u1", Turn::new(Role::Model, "Olá! Como posso ajudar?"))
            .unwrap();

        let history = store.history("u1").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text, "oi");
        assert_eq!(history[1].role, Role::Model);
    }

    #[test]
    fn window_evicts_oldest_turns() {
        let store = store();
        for i in 0..15 {
            store
                .append("u1", Turn::new(Role::User, format!("mensagem {i}")))
                .unwrap();
        }

        let history = store.history("u1").unwrap();
        assert_eq!(history.len(), MAX_HISTORY_TURNS);
        // Oldest five fell out, window starts at message 5.
        assert_eq!(history[0].text, "mensagem 5");
        assert_eq!(history[9].text, "mensagem 14");
    }

    #[test]
    fn histories_are_isolated_per_user() {
        let store = store();
        store.append("alice", Turn::new(Role::User, "a")).unwrap();
        store.append("bob", Turn::new(Role::User, "b")).unwrap();

        assert_eq!(store.history("alice").unwrap().len(), 1);
        assert_eq!(store.history("bob").unwrap().len(), 1);
        assert_eq!(store.user_count().unwrap(), 2);
    }

    #[test]
    fn unknown_user_has_empty_history() {
        let store = store();
        assert!(store.history("ghost").unwrap().is_empty());
        assert_eq!(store.len("ghost").unwrap(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = store();
        store.append("u1", Turn::new(Role::User, "oi")).unwrap();

        store.clear("u1").unwrap();
        assert!(store.history("u1").unwrap().is_empty());
        assert_eq!(store.user_count().unwrap(), 0);

        // Clearing again is a no-op, not an error.
        store.clear("u1").unwrap();
    }

    #[test]
    fn concurrent_appends_stay_within_window() {
        use std::sync::Arc;

        let store = Arc::new(ConversationStore::default());
        let mut handles = Vec::new();
        for t in 0..4 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    store
                        .append("shared", Turn::new(Role::User, format!("t{t}-{i}")))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len("shared").unwrap(), MAX_HISTORY_TURNS);
    }
}
