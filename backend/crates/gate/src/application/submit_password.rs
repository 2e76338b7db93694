//! Submit Password Use Case
//!
//! Verifies a submitted password and unlocks the session.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use platform::crypto::{constant_time_eq, sha256_hex};

use crate::application::AUTH_SUCCESS_KEY;
use crate::application::config::GateConfig;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::SessionId;
use crate::error::{GateError, GateResult};

/// Unlock output
///
/// Everything the handler needs to issue the auth cookie. The value is the
/// expected digest, never the submitted plaintext.
pub struct UnlockOutput {
    /// Value for the auth cookie
    pub cookie_value: String,
    /// Absolute cookie expiry (issuance + 1 day)
    pub expires_at: DateTime<Utc>,
}

/// Submit password use case
pub struct SubmitPasswordUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
    config: Arc<GateConfig>,
}

impl<S> SubmitPasswordUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>, config: Arc<GateConfig>) -> Self {
        Self { store, config }
    }

    /// Verify the submitted password against the expected digest.
    ///
    /// On a match: sets the session's unlock flag and returns the cookie
    /// material. On a mismatch: returns `GateError::IncorrectPassword`
    /// without touching the session or issuing any cookie.
    pub async fn execute(
        &self,
        submitted: &str,
        session_id: &SessionId,
    ) -> GateResult<UnlockOutput> {
        let expected = self.config.expected_digest()?;
        let submitted_digest = sha256_hex(submitted);

        if !constant_time_eq(submitted_digest.as_bytes(), expected.as_bytes()) {
            tracing::warn!(session_id = %session_id, "Failed unlock attempt");
            return Err(GateError::IncorrectPassword);
        }

        self.store.set(session_id, AUTH_SUCCESS_KEY, "true").await?;

        let ttl = TimeDelta::from_std(self.config.auth_cookie_ttl)
            .map_err(|e| GateError::Session(e.to_string()))?;
        let expires_at = Utc::now() + ttl;

        tracing::info!(session_id = %session_id, "Viewer unlocked");

        Ok(UnlockOutput {
            cookie_value: expected,
            expires_at,
        })
    }
}
