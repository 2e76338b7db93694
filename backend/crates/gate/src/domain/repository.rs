//! Repository Traits
//!
//! Interface for per-session state. Implementation is in the
//! infrastructure layer.

use crate::domain::value_object::SessionId;
use crate::error::GateResult;

/// Per-session key-value store.
///
/// Holds request-scoped state (the unlock flag) keyed by session identity.
/// Entries share the session's lifecycle: they are never persisted and no
/// record of issued auth cookies is kept here.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Read a value for this session
    async fn get(&self, session_id: &SessionId, key: &str) -> GateResult<Option<String>>;

    /// Write a value for this session
    async fn set(&self, session_id: &SessionId, key: &str, value: &str) -> GateResult<()>;
}
