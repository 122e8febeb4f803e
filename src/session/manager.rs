use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::session::{Registry, Session};

/// In-memory session registry mapping id → session.
///
/// Cloning the manager clones a handle onto the same registry, so one
/// instance can be shared across concurrent connection tasks. Independent
/// instances (one per test, typically) never observe each other's sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Registry>,
}

impl SessionManager {
    /// Returns a fresh, empty registry.
    pub fn create() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Constructs a session under `id`, registers it, and returns the
    /// handle. The session is findable before this returns.
    pub async fn create_session(&self, id: impl Into<String>) -> Session {
        let id = id.into();
        let session = Session::new(id.clone(), Arc::downgrade(&self.sessions));
        self.sessions.write().await.insert(id, session.clone());
        session
    }

    /// Registers `session` under its own id, overwriting any prior session
    /// with the same id.
    pub async fn add(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.id().to_string(), session);
    }

    /// O(1) lookup; `None` when no session is registered under `id`.
    pub async fn find_session(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Deregisters by id; no-op when already absent.
    pub async fn remove(&self, session: &Session) {
        self.sessions.write().await.remove(session.id());
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
