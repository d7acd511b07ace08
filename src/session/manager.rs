use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::conversation::ConversationBuffer;

/// Session used by requests that do not name one.
pub const DEFAULT_SESSION: &str = "default";

/// Longest session id accepted from a client; longer ids are truncated.
const MAX_SESSION_ID_LEN: usize = 128;

/// Sessions kept in memory; opening one more evicts the oldest.
pub const MAX_SESSIONS: usize = 1024;

/// One client's conversation.
///
/// The async mutex is the serialization point: a query holds it from appending
/// the user turn until the model turn is recorded, so turns land in arrival order.
pub struct Session {
    pub id: String,
    pub start_time: String,
    pub conversation: tokio::sync::Mutex<ConversationBuffer>,
    opened: u64,
}

impl Session {
    fn new(id: String, opened: u64) -> Self {
        Self {
            id,
            opened,
            start_time: chrono::Utc::now().to_rfc3339(),
            conversation: tokio::sync::Mutex::new(ConversationBuffer::new()),
        }
    }
}

/// In-memory registry of sessions, bounded to `capacity` entries.
///
/// An evicted session lives on for requests already holding it; the next
/// request with its id starts a fresh conversation.
pub struct SessionManager {
    state: Mutex<Registry>,
    capacity: usize,
}

#[derive(Default)]
struct Registry {
    sessions: HashMap<String, Arc<Session>>,
    opened: u64,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::with_capacity(MAX_SESSIONS)
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(Registry::default()),
            capacity: capacity.max(1),
        }
    }

    /// Look up a session, creating it on first use. Blank ids map to [`DEFAULT_SESSION`].
    pub fn get_or_create(&self, id: Option<&str>) -> Arc<Session> {
        let key = normalize_id(id);
        let mut state = self.state.lock();
        if let Some(session) = state.sessions.get(&key) {
            return session.clone();
        }

        if state.sessions.len() >= self.capacity {
            let oldest = state
                .sessions
                .values()
                .min_by_key(|s| s.opened)
                .map(|s| s.id.clone());
            if let Some(oldest) = oldest {
                log::info!("Session limit {} reached, dropping session {}", self.capacity, oldest);
                state.sessions.remove(&oldest);
            }
        }

        log::debug!("Opening session {}", key);
        state.opened += 1;
        let session = Arc::new(Session::new(key.clone(), state.opened));
        state.sessions.insert(key, session.clone());
        session
    }

    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.state.lock().sessions.get(&normalize_id(Some(id))).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().sessions.is_empty()
    }
}

fn normalize_id(id: Option<&str>) -> String {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => id.chars().take(MAX_SESSION_ID_LEN).collect(),
        _ => DEFAULT_SESSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Part;

    #[test]
    fn blank_ids_share_the_default_session() {
        let manager = SessionManager::new();
        let a = manager.get_or_create(None);
        let b = manager.get_or_create(Some("   "));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.id, DEFAULT_SESSION);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn oldest_session_is_dropped_at_capacity() {
        let manager = SessionManager::with_capacity(2);
        let first = manager.get_or_create(Some("first"));
        manager.get_or_create(Some("second"));
        manager.get_or_create(Some("first"));
        manager.get_or_create(Some("third"));

        assert_eq!(manager.len(), 2);
        assert!(manager.get("first").is_none());
        assert!(manager.get("second").is_some());
        assert!(manager.get("third").is_some());

        let reopened = manager.get_or_create(Some("first"));
        assert!(!Arc::ptr_eq(&first, &reopened));
        assert!(manager.get("second").is_none());
    }

    #[tokio::test]
    async fn sessions_keep_separate_buffers() {
        let manager = SessionManager::new();
        let alice = manager.get_or_create(Some("alice"));
        let bob = manager.get_or_create(Some("bob"));

        alice.conversation.lock().await.push_user(vec![Part::text("hi")]);

        assert_eq!(alice.conversation.lock().await.len(), 1);
        assert!(bob.conversation.lock().await.is_empty());
        assert!(Arc::ptr_eq(&manager.get("alice").unwrap(), &alice));
        assert!(manager.get("carol").is_none());
    }
}
