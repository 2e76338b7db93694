//! In-Memory Session Store
//!
//! Process-local session state. Entries live until the process exits;
//! a session whose browser-side cookie has died simply never presents
//! its id again.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::SessionId;
use crate::error::GateResult;

/// Shared in-memory key-value store keyed by session id
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<RwLock<HashMap<Uuid, HashMap<String, String>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently holding state
    pub async fn session_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &SessionId, key: &str) -> GateResult<Option<String>> {
        let sessions = self.inner.read().await;
        Ok(sessions
            .get(session_id.as_uuid())
            .and_then(|entries| entries.get(key).cloned()))
    }

    async fn set(&self, session_id: &SessionId, key: &str, value: &str) -> GateResult<()> {
        let mut sessions = self.inner.write().await;
        sessions
            .entry(*session_id.as_uuid())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_session_is_none() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        assert_eq!(store.get(&id, "auth_success").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        store.set(&id, "auth_success", "true").await.unwrap();
        assert_eq!(
            store.get(&id, "auth_success").await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        let a = SessionId::new();
        let b = SessionId::new();
        store.set(&a, "auth_success", "true").await.unwrap();
        assert_eq!(store.get(&b, "auth_success").await.unwrap(), None);
    }
}
