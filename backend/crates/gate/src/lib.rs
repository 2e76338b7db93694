//! Gate (Password-Gated Viewer) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session identity, session store trait
//! - `application/` - Use cases and configuration
//! - `infra/` - In-memory session store implementation
//! - `presentation/` - HTTP handlers, pages, router
//!
//! ## Features
//! - Single shared password, compared as a SHA-256 digest
//! - Persistent auth cookie (digest value, 1-day expiry)
//! - Per-session unlock flag, independent of the cookie lifecycle
//! - Full-viewport embed of a configured spreadsheet URL
//!
//! ## Security Model
//! - The auth cookie carries the password digest, never the plaintext
//! - Digest comparison is constant-time
//! - A user is authenticated iff the cookie digest matches OR the
//!   session flag is set; nothing else decides it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::GateConfig;
pub use error::{GateError, GateResult};
pub use infra::memory::InMemorySessionStore;
pub use presentation::router::{gate_router, gate_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemorySessionStore as GateStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
