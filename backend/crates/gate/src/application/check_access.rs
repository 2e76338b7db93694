//! Check Access Use Case
//!
//! Decides, on each page load, whether the visitor sees the embedded
//! content or the login form.

use std::sync::Arc;

use platform::crypto::constant_time_eq;

use crate::application::AUTH_SUCCESS_KEY;
use crate::application::config::GateConfig;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::SessionId;
use crate::error::GateResult;

/// Check access use case
///
/// Owns the single authentication invariant: a visitor is authenticated
/// iff the presented cookie digest matches the expected digest OR the
/// session's unlock flag is set.
pub struct CheckAccessUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
    config: Arc<GateConfig>,
}

impl<S> CheckAccessUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>, config: Arc<GateConfig>) -> Self {
        Self { store, config }
    }

    /// Evaluate the authentication invariant for one page load.
    ///
    /// Fails with `GateError::MissingPassword` when no password is
    /// configured; the caller must halt rendering on that error. A cookie
    /// match with an unset session flag sets the flag, so later checks in
    /// the same session short-circuit without re-reading the cookie. The
    /// failure path has no side effects.
    pub async fn execute(
        &self,
        presented_digest: Option<&str>,
        session_id: &SessionId,
    ) -> GateResult<bool> {
        let expected = self.config.expected_digest()?;

        let cookie_valid = presented_digest
            .is_some_and(|digest| constant_time_eq(digest.as_bytes(), expected.as_bytes()));

        let session_valid = self
            .store
            .get(session_id, AUTH_SUCCESS_KEY)
            .await?
            .as_deref()
            == Some("true");

        if cookie_valid || session_valid {
            if cookie_valid && !session_valid {
                self.store.set(session_id, AUTH_SUCCESS_KEY, "true").await?;
                tracing::debug!(session_id = %session_id, "Cookie-authenticated visit, session flag set");
            }
            return Ok(true);
        }

        Ok(false)
    }
}
