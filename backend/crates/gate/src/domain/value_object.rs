//! Value Objects

use std::fmt;
use uuid::Uuid;

/// Identity of one interactive client session.
///
/// Carried by a browser-session cookie, so the identity (and everything the
/// session store holds under it) dies with the client session. This is
/// deliberately a different lifecycle from the auth cookie, which survives
/// until its calendar expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Mint a fresh session identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session identity from its cookie representation.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
