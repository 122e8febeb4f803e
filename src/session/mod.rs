//! Server-side session state.
//!
//! A [`Session`] is a cheaply-clonable handle onto attribute state owned by
//! the process-wide [`SessionManager`] registry. Handles stay valid while
//! the manager holds the session; `invalidate` clears the attributes,
//! deregisters the session and marks every outstanding handle dead.
//!
//! Sessions are addressed by an opaque identifier carried in the client's
//! `JSESSIONID` cookie. Nothing is persisted across restarts.

pub mod manager;

pub use manager::SessionManager;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::RwLock;

pub(crate) type Registry = RwLock<HashMap<String, Session>>;

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The session was invalidated; the handle is unusable.
    Invalidated,
}

/// Handle to one client's server-side key/value state.
///
/// Clones share the same underlying attribute map. Attribute mutation is
/// safe from concurrent connections at single-key granularity
/// (last-writer-wins per key); there is no cross-key atomicity.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    attributes: RwLock<HashMap<String, String>>,
    invalidated: AtomicBool,
    registry: Weak<Registry>,
}

impl Session {
    pub(crate) fn new(id: String, registry: Weak<Registry>) -> Self {
        Self {
            id,
            inner: Arc::new(SessionInner {
                attributes: RwLock::new(HashMap::new()),
                invalidated: AtomicBool::new(false),
                registry,
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn ensure_live(&self) -> Result<(), SessionError> {
        if self.inner.invalidated.load(Ordering::SeqCst) {
            return Err(SessionError::Invalidated);
        }
        Ok(())
    }

    pub async fn get_attribute(&self, name: &str) -> Result<Option<String>, SessionError> {
        self.ensure_live()?;
        Ok(self.inner.attributes.read().await.get(name).cloned())
    }

    pub async fn set_attribute(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_live()?;
        self.inner
            .attributes
            .write()
            .await
            .insert(name.into(), value.into());
        Ok(())
    }

    pub async fn remove_attribute(&self, name: &str) -> Result<Option<String>, SessionError> {
        self.ensure_live()?;
        Ok(self.inner.attributes.write().await.remove(name))
    }

    /// Clears all attributes and removes the session from its owning
    /// manager. Every handle to this session becomes unusable: subsequent
    /// attribute access fails with [`SessionError::Invalidated`].
    pub async fn invalidate(&self) {
        self.inner.invalidated.store(true, Ordering::SeqCst);
        self.inner.attributes.write().await.clear();

        if let Some(registry) = self.inner.registry.upgrade() {
            registry.write().await.remove(&self.id);
        }

        tracing::debug!(session_id = %self.id, "Session invalidated");
    }
}

// Sessions compare by identifier, matching registry semantics: the registry
// holds at most one session per id.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Session {}
