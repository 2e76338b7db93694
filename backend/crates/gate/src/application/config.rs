//! Application Configuration
//!
//! Configuration for the Gate application layer.

use std::env;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::sha256_hex;

use crate::error::{GateError, GateResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Gate application configuration
///
/// The two secrets are optional on purpose: their absence is a runtime
/// configuration error surfaced on the affected page, not a startup panic.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Page title shown in the browser tab
    pub page_title: String,
    /// Name of the persistent auth cookie
    pub auth_cookie_name: String,
    /// Name of the browser-session cookie carrying the session id
    pub session_cookie_name: String,
    /// Auth cookie lifetime (1 day)
    pub auth_cookie_ttl: Duration,
    /// Whether to require Secure cookies
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Shared plaintext password (from `VIEWER_PASSWORD`)
    pub expected_password: Option<String>,
    /// URL embedded for authenticated visitors (from `TARGET_SHEET_URL`)
    pub target_url: Option<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            page_title: "Sheet Viewer".to_string(),
            auth_cookie_name: "sheet_viewer_token".to_string(),
            session_cookie_name: "viewer_session".to_string(),
            auth_cookie_ttl: Duration::from_secs(24 * 3600), // 1 day
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            expected_password: None,
            target_url: None,
        }
    }
}

impl GateConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Build configuration from environment variables.
    ///
    /// Empty values count as absent, so an iframe with an empty `src` can
    /// never be rendered.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            page_title: non_empty_var("PAGE_TITLE").unwrap_or(defaults.page_title),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| !matches!(v.trim(), "false" | "0" | "no"))
                .unwrap_or(defaults.cookie_secure),
            expected_password: non_empty_var("VIEWER_PASSWORD"),
            target_url: non_empty_var("TARGET_SHEET_URL"),
            ..defaults
        }
    }

    /// Digest the configured password.
    ///
    /// Recomputed from the plaintext on every check, mirroring the
    /// secret-store layout where only the plaintext is provisioned.
    pub fn expected_digest(&self) -> GateResult<String> {
        let password = self
            .expected_password
            .as_deref()
            .ok_or(GateError::MissingPassword)?;
        Ok(sha256_hex(password))
    }

    /// Auth cookie TTL in whole seconds
    pub fn auth_cookie_ttl_secs(&self) -> i64 {
        self.auth_cookie_ttl.as_secs() as i64
    }

    /// Cookie settings for the persistent auth cookie
    pub fn auth_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.auth_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.auth_cookie_ttl_secs()),
        }
    }

    /// Cookie settings for the session-id cookie (no Max-Age: dies with
    /// the browser session)
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cookie_names() {
        let config = GateConfig::default();
        assert_eq!(config.auth_cookie_name, "sheet_viewer_token");
        assert_eq!(config.session_cookie_name, "viewer_session");
        assert_eq!(config.auth_cookie_ttl_secs(), 86400);
    }

    #[test]
    fn test_expected_digest_requires_password() {
        let config = GateConfig::default();
        assert!(matches!(
            config.expected_digest(),
            Err(GateError::MissingPassword)
        ));

        let config = GateConfig {
            expected_password: Some("abc123".to_string()),
            ..GateConfig::default()
        };
        assert_eq!(
            config.expected_digest().unwrap(),
            "6ca13d52ca70c883e0f0bb101e425a89e8624de51db2d2392593af6a84118090"
        );
    }

    #[test]
    fn test_auth_cookie_is_persistent_session_cookie_is_not() {
        let config = GateConfig::development();
        assert_eq!(config.auth_cookie().max_age_secs, Some(86400));
        assert_eq!(config.session_cookie().max_age_secs, None);
        assert!(!config.auth_cookie().secure);
    }
}
