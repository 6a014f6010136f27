//! Bounded store of live brainstorming sessions.

use std::sync::Arc;

use brainstorm::Session;
use indexmap::IndexMap;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

/// A session shared between requests; the mutex keeps one message in flight.
pub type SharedSession = Arc<Mutex<Session>>;

/// Sessions keyed by id, least recently used first.
pub struct SessionStore {
    max_sessions: usize,
    /// IndexMap preserves insertion order, so index 0 is the LRU entry.
    sessions: RwLock<IndexMap<String, SharedSession>>,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            max_sessions: max_sessions.max(1),
            sessions: RwLock::new(IndexMap::new()),
        }
    }

    /// Store a session and return its new id, evicting the least recently
    /// used sessions when full.
    pub async fn insert(&self, session: Session) -> String {
        let id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;

        while sessions.len() >= self.max_sessions {
            if let Some((evicted, _)) = sessions.shift_remove_index(0) {
                debug!(session_id = %evicted, "Evicted brainstorming session");
            }
        }

        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));
        id
    }

    /// Look up a session and mark it as most recently used.
    pub async fn get(&self, id: &str) -> Option<SharedSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.shift_remove(id)?;
        sessions.insert(id.to_string(), session.clone());
        Some(session)
    }

    /// Drop a session. Returns false when it did not exist.
    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.write().await.shift_remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
